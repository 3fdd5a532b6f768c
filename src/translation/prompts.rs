/*!
 * Prompt construction for the article translation conversation.
 *
 * Every chunk is sent with the same fixed three-part conversation: a system
 * message framing the translator role, an assistant acknowledgment, and a
 * user message embedding the chunk together with its position in the
 * document.
 */

use crate::providers::ChatMessage;

/// System message framing the model as a technology-article translator.
pub const SYSTEM_PROMPT: &str = "You are a professional technology-article translator, \
translating articles from English to zh-Hant-TW.";

/// Assistant acknowledgment priming the conversation.
pub const ASSISTANT_ACK: &str =
    "Ok, I am a professional translator from English to zh-Hant-TW.";

/// Build the fixed conversation for one chunk at `index` of `total`.
pub fn build_translation_messages(chunk: &str, index: usize, total: usize) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::assistant(ASSISTANT_ACK),
        ChatMessage::user(user_message(chunk, index, total)),
    ]
}

fn user_message(chunk: &str, index: usize, total: usize) -> String {
    format!(
        r#"You are being provided a part of the HTML code of an article. It is most likely a part of a technology column, but sometimes it will be something other than that. The content of the HTML is delimited by triple backticks below.

The text you translate will be concatenated with the other translated passages, so make sure to output the full text containing the original HTML code, and do not quote it in triple backticks.

You have to:
1. Read through the HTML code. Remember, the passage might seem to be cut in half, which is totally normal.
2. Translate the article inside into zh-Hant-TW.
3. Rewrite the translated article to make it more readable for a zh-Hant-TW reader by changing the words or the word order.
4. Output the translated HTML code without quoting it in triple backticks.

part of the passage: {} / {}
content: ```{}```"#,
        index + 1,
        total,
        chunk
    )
}
