//! Demo data shown when the window opens.

use crate::core::state::{Author, ChatMessage, RecentChat};

pub fn seed_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new("Hello! How can I assist you today?", Author::Bot, "04:50 PM"),
        ChatMessage::new(
            "I'm a demo AI assistant. In a real implementation, this would connect to an actual AI service like OpenAI's GPT or Claude.",
            Author::Bot,
            "04:50 PM",
        ),
        ChatMessage::new(
            "Great, can you tell me more about this terminal UI?",
            Author::User,
            "04:51 PM",
        ),
        ChatMessage::new(
            "Of course! It is built with ratatui, which renders immediate-mode widgets into the terminal. Every frame is drawn from a single state record.",
            Author::Bot,
            "04:52 PM",
        ),
        ChatMessage::new(
            "That sounds interesting. I will give it a try.",
            Author::User,
            "04:53 PM",
        ),
    ]
}

pub fn seed_recent_chats() -> Vec<RecentChat> {
    [
        ("Welcome Chat", "Today"),
        ("Chat 2", "Yesterday"),
        ("Chat 3", "2 days ago"),
        ("Chat 4", "3 days ago"),
        ("Chat 5", "4 days ago"),
        ("Chat 6", "5 days ago"),
        ("Chat 7", "6 days ago"),
        ("Chat 8", "1 week ago"),
        ("Chat 9", "1 week ago"),
        ("Chat 10", "1 week ago"),
        ("Chat 11", "2 weeks ago"),
        ("Chat 12", "2 weeks ago"),
    ]
    .into_iter()
    .map(|(name, when)| RecentChat::new(name, when))
    .collect()
}
