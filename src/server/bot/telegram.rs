use serde::{Deserialize, Serialize};

use crate::server::error::bot::BotError;

/// Telegram limits forum topic names to 128 characters.
const MAX_TOPIC_NAME_CHARS: usize = 128;

#[derive(Serialize)]
struct CreateForumTopicRequest<'a> {
    chat_id: &'a str,
    name: &'a str,
}

#[derive(Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    result: Option<T>,
}

#[derive(Deserialize)]
struct ForumTopic {
    message_thread_id: i64,
}

/// Minimal Bot API client for the free-students discussion group.
#[derive(Clone)]
pub struct TelegramBot {
    http: reqwest::Client,
    api_url: String,
    token: String,
    free_group_id: String,
}

impl TelegramBot {
    pub fn new(
        http: reqwest::Client,
        api_url: impl Into<String>,
        token: impl Into<String>,
        free_group_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            free_group_id: free_group_id.into(),
        }
    }

    /// Creates a forum topic and returns its `message_thread_id`.
    ///
    /// # Returns
    /// - `Ok(i64)` - Thread id of the new topic
    /// - `Err(BotError::Api)` - Telegram answered `ok: false`
    /// - `Err(BotError::Http)` - Request failed or the body was not a Bot API response
    pub async fn create_forum_topic(&self, chat_id: &str, name: &str) -> Result<i64, BotError> {
        let url = format!("{}/bot{}/createForumTopic", self.api_url, self.token);

        let response: TelegramResponse<ForumTopic> = self
            .http
            .post(url)
            .json(&CreateForumTopicRequest { chat_id, name })
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            return Err(BotError::Api(
                response
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        response
            .result
            .map(|topic| topic.message_thread_id)
            .ok_or(BotError::MissingResult)
    }

    /// Opens the discussion thread of a free course, named `"{course} | {creator}"`.
    pub async fn open_course_thread(
        &self,
        course_name: &str,
        creator_name: &str,
    ) -> Result<i64, BotError> {
        let name = thread_name(course_name, creator_name);

        self.create_forum_topic(&self.free_group_id, &name).await
    }
}

fn thread_name(course_name: &str, creator_name: &str) -> String {
    format!("{} | {}", course_name, creator_name)
        .chars()
        .take(MAX_TOPIC_NAME_CHARS)
        .collect()
}
