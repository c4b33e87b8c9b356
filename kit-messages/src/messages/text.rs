//! Chat bot, Morse code and text analysis messages

pub struct TextMessages {
    // ============================================================================
    // Chat
    // ============================================================================
    pub chat_empty_input: &'static str,
    pub chat_farewell: &'static str,
    pub chat_greeting: &'static str,
    pub chat_prompt: &'static str,
    pub chat_reply: &'static str,

    // ============================================================================
    // Morse
    // ============================================================================
    pub morse_choice_prompt: &'static str,
    pub morse_code_prompt: &'static str,
    pub morse_decoded: &'static str,
    pub morse_encoded: &'static str,
    pub morse_invalid_choice: &'static str,
    pub morse_menu: &'static str,
    pub morse_text_prompt: &'static str,

    // ============================================================================
    // Words and analyze
    // ============================================================================
    pub words_file_prompt: &'static str,
    pub words_header: &'static str,
    pub words_limit_invalid: &'static str,
    pub words_limit_prompt: &'static str,
    pub words_none: &'static str,
    pub words_text_prompt: &'static str,
    pub analyze_header: &'static str,
    pub analyze_preview_header: &'static str,
    pub analyze_saved: &'static str,
}

pub const TEXT_MESSAGES: TextMessages = TextMessages {
    chat_empty_input: "Please say something!",
    chat_farewell: "{name}: Goodbye! Have a great day!",
    chat_greeting: "Hi, I'm {name}. Type 'bye' to leave.",
    chat_prompt: "You",
    chat_reply: "{name}: {reply}",

    morse_choice_prompt: "Choose an option (1-3)",
    morse_code_prompt: "Morse code (letters separated by spaces, words by ' / ')",
    morse_decoded: "Decoded text: {text}",
    morse_encoded: "Morse code: {code}",
    morse_invalid_choice: "Invalid choice. Please enter 1, 2 or 3.",
    morse_menu: "\n1. Text to Morse\n2. Morse to text\n3. Quit",
    morse_text_prompt: "Text to encode",

    words_file_prompt: "File to analyse",
    words_header: "Top {count} words:",
    words_limit_invalid: "The number of words must be at least 1.",
    words_limit_prompt: "How many words to show (blank for all)",
    words_none: "No words found.",
    words_text_prompt: "Text to analyse (blank to read a file)",
    analyze_header: "Analysis of {file}",
    analyze_preview_header: "--- Preview ---",
    analyze_saved: "Report saved to {path}",
};
