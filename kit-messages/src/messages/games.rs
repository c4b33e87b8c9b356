//! Blackjack, quiz, US states and flash card messages

pub struct GamesMessages {
    // ============================================================================
    // Blackjack
    // ============================================================================
    pub blackjack_dealer_first: &'static str,
    pub blackjack_final_dealer: &'static str,
    pub blackjack_final_player: &'static str,
    pub blackjack_hit_prompt: &'static str,
    pub blackjack_play_prompt: &'static str,
    pub blackjack_player_hand: &'static str,
    pub blackjack_tally: &'static str,

    // ============================================================================
    // Quiz
    // ============================================================================
    pub quiz_answer_invalid: &'static str,
    pub quiz_correct: &'static str,
    pub quiz_final: &'static str,
    pub quiz_question: &'static str,
    pub quiz_running_score: &'static str,
    pub quiz_wrong: &'static str,

    // ============================================================================
    // US states
    // ============================================================================
    pub states_all_named: &'static str,
    pub states_already: &'static str,
    pub states_gave_up: &'static str,
    pub states_intro: &'static str,
    pub states_limit_invalid: &'static str,
    pub states_missed_saved: &'static str,
    pub states_prompt: &'static str,
    pub states_score: &'static str,
    pub states_time_up: &'static str,
    pub states_unknown: &'static str,

    // ============================================================================
    // Flash cards
    // ============================================================================
    pub flashcards_answer_known: &'static str,
    pub flashcards_answer_prompt: &'static str,
    pub flashcards_answer_quit: &'static str,
    pub flashcards_answer_switch: &'static str,
    pub flashcards_answer_unknown: &'static str,
    pub flashcards_flip_prompt: &'static str,
    pub flashcards_milestone: &'static str,
    pub flashcards_mode: &'static str,
    pub flashcards_mode_empty: &'static str,
    pub flashcards_mode_familiar: &'static str,
    pub flashcards_mode_new: &'static str,
    pub flashcards_mode_unfamiliar: &'static str,
    pub flashcards_no_pairs: &'static str,
    pub flashcards_pair_added: &'static str,
    pub flashcards_pair_replaced: &'static str,
    pub flashcards_pick_mode: &'static str,
    pub flashcards_pick_pair: &'static str,
    pub flashcards_summary: &'static str,
}

pub const GAMES_MESSAGES: GamesMessages = GamesMessages {
    blackjack_dealer_first: "Computer's first card: {card}",
    blackjack_final_dealer: "Computer's final hand: {cards}, final score: {score}",
    blackjack_final_player: "Your final hand: {cards}, final score: {score}",
    blackjack_hit_prompt: "Draw another card?",
    blackjack_play_prompt: "Play a game of Blackjack?",
    blackjack_player_hand: "Your cards: {cards}, current score: {score}",
    blackjack_tally: "Wins: {wins}  Losses: {losses}  Draws: {draws}",

    quiz_answer_invalid: "Please answer True or False.",
    quiz_correct: "You got it right!",
    quiz_final: "You've completed the quiz. Your final score was {score}/{asked}.",
    quiz_question: "Q.{number}/{total}: {question} (True/False)",
    quiz_running_score: "Your current score is {score}/{asked}.",
    quiz_wrong: "That's wrong. The correct answer was {answer}.",

    states_all_named: "You named all {total} states!",
    states_already: "You already named {state}.",
    states_gave_up: "Game ended.",
    states_intro: "Name all {total} states in {clock}. Type 'exit' to stop.",
    states_limit_invalid: "The time limit must be at least one second.",
    states_missed_saved: "Wrote {count} missed states to {path}",
    states_prompt: "{guessed}/{total} states, {clock} left",
    states_score: "You named {guessed} of {total} states.",
    states_time_up: "Time's up!",
    states_unknown: "{state} is not a state.",

    flashcards_answer_known: "I know it",
    flashcards_answer_prompt: "Did you know it?",
    flashcards_answer_quit: "Quit",
    flashcards_answer_switch: "Change mode",
    flashcards_answer_unknown: "Still learning",
    flashcards_flip_prompt: "Press Enter to flip",
    flashcards_milestone: "Great job! {count} words learned this session!",
    flashcards_mode: "Mode: {mode}",
    flashcards_mode_empty: "Nothing to review in {mode} mode yet.",
    flashcards_mode_familiar: "Familiar",
    flashcards_mode_new: "New",
    flashcards_mode_unfamiliar: "Unfamiliar",
    flashcards_no_pairs: "No language pairs yet. Add one with 'kit flashcards add <front> <back> <csv>'.",
    flashcards_pair_added: "Added language pair {pair}",
    flashcards_pair_replaced: "Replaced language pair {pair} and cleared its progress",
    flashcards_pick_mode: "Study mode",
    flashcards_pick_pair: "Language pair",
    flashcards_summary: "Learned {learned} this session. {known} known, {to_learn} to learn, {total} cards in the deck.",
};
