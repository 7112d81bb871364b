//! Routing integration tests: drive the handler chain with synthetic messages,
//! record outgoing traffic with a mock Bot, and stub the weather API with
//! mockito.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mockito::Matcher;

use bot_core::{
    Bot, BotError, Chat, Handler, HandlerChain, HandlerResponse, Message, Result, User,
};
use weather_bot::handlers::{CityHandler, CommandHandler};
use weather_bot::telegram::{handle_update, FALLBACK_REPLY};
use weather_client::WeatherClient;

const DEFAULT_CITY: &str = "Testville";

const OK_BODY: &str = r#"{
    "cod": 200,
    "name": "Москва",
    "weather": [{"main": "Clear", "description": "ясно"}],
    "main": {"temp": 10.5, "feels_like": 9.0, "humidity": 50, "pressure": 1015},
    "wind": {"speed": 3.2},
    "sys": {"sunset": 1700000000}
}"#;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Sent {
    chat_id: i64,
    text: String,
    markdown: bool,
}

/// Records every outgoing message and typing action instead of hitting
/// Telegram.
#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
    typing: Mutex<Vec<i64>>,
}

impl RecordingBot {
    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn typing(&self) -> Vec<i64> {
        self.typing.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent {
            chat_id: chat.id,
            text: text.to_string(),
            markdown: false,
        });
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent {
            chat_id: chat.id,
            text: text.to_string(),
            markdown: true,
        });
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.typing.lock().unwrap().push(chat.id);
        Ok(())
    }
}

fn message(text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 42,
            username: Some("alexey42".to_string()),
            first_name: Some("Алексей".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 1001,
            chat_type: "Private".to_string(),
        },
        content: text.to_string(),
        created_at: Utc::now(),
    }
}

fn build_chain(weather_url: &str, bot: Arc<RecordingBot>) -> HandlerChain {
    let client = Arc::new(
        WeatherClient::new("test-key".to_string(), Some(weather_url.to_string())).unwrap(),
    );
    let sender: Arc<dyn Bot> = bot;
    HandlerChain::new()
        .add_handler(Arc::new(CommandHandler::new(
            client.clone(),
            sender.clone(),
            DEFAULT_CITY.to_string(),
        )))
        .add_handler(Arc::new(CityHandler::new(client, sender)))
}

#[tokio::test]
async fn start_replies_with_welcome_naming_the_sender() {
    let bot = Arc::new(RecordingBot::default());
    let chain = build_chain("http://127.0.0.1:1", bot.clone());

    handle_update(bot.clone(), chain, message("/start")).await;

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.contains("Алексей"));
    assert!(sent[0].text.contains(DEFAULT_CITY));
    assert!(!sent[0].markdown);
    assert!(bot.typing().is_empty());
}

#[tokio::test]
async fn help_replies_with_template_naming_the_default_city() {
    let bot = Arc::new(RecordingBot::default());
    let chain = build_chain("http://127.0.0.1:1", bot.clone());

    handle_update(bot.clone(), chain, message("/help")).await;

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.contains("/weather"));
    assert!(sent[0].text.contains(DEFAULT_CITY));
}

#[tokio::test]
async fn unknown_command_gets_canned_reply_without_weather_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(OK_BODY)
        .expect(0)
        .create_async()
        .await;

    let bot = Arc::new(RecordingBot::default());
    let chain = build_chain(&server.url(), bot.clone());

    handle_update(bot.clone(), chain, message("/unknowncmd")).await;

    mock.assert_async().await;
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.contains("не понимаю эту команду"));
}

#[tokio::test]
async fn free_text_triggers_exactly_one_weather_call_for_that_city() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::UrlEncoded("q".into(), "Moscow".into()))
        .with_status(200)
        .with_body(OK_BODY)
        .expect(1)
        .create_async()
        .await;

    let bot = Arc::new(RecordingBot::default());
    let chain = build_chain(&server.url(), bot.clone());

    handle_update(bot.clone(), chain, message("Moscow")).await;

    mock.assert_async().await;
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].markdown);
    assert!(sent[0].text.contains("Погода в Москва"));
    assert_eq!(bot.typing(), vec![1001]);
}

#[tokio::test]
async fn weather_command_uses_the_default_city() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::UrlEncoded("q".into(), DEFAULT_CITY.into()))
        .with_status(200)
        .with_body(OK_BODY)
        .expect(1)
        .create_async()
        .await;

    let bot = Arc::new(RecordingBot::default());
    let chain = build_chain(&server.url(), bot.clone());

    handle_update(bot.clone(), chain, message("/weather")).await;

    mock.assert_async().await;
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].markdown);
    assert_eq!(bot.typing(), vec![1001]);
}

#[tokio::test]
async fn network_failure_still_produces_a_reply() {
    // Nothing listens on port 1; the canned network message must come back.
    let bot = Arc::new(RecordingBot::default());
    let chain = build_chain("http://127.0.0.1:1", bot.clone());

    handle_update(bot.clone(), chain, message("Moscow")).await;

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.contains("Ошибка сети"));
}

#[tokio::test]
async fn empty_text_produces_no_reply() {
    let bot = Arc::new(RecordingBot::default());
    let chain = build_chain("http://127.0.0.1:1", bot.clone());

    handle_update(bot.clone(), chain, message("   ")).await;

    assert!(bot.sent().is_empty());
    assert!(bot.typing().is_empty());
}

struct FailingHandler;

#[async_trait]
impl Handler for FailingHandler {
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Err(BotError::Handler("boom".to_string()))
    }
}

#[tokio::test]
async fn chain_failure_sends_the_fallback_apology() {
    let bot = Arc::new(RecordingBot::default());
    let chain = HandlerChain::new().add_handler(Arc::new(FailingHandler));

    handle_update(bot.clone(), chain, message("anything")).await;

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, FALLBACK_REPLY);
}
