use anyhow::Context as _;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// 성공 응답 봉투
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// 에러 응답 본문
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    details: Option<String>,
    #[serde(default, rename = "invalidFields")]
    invalid_fields: Option<Vec<String>>,
}

pub fn client() -> Client {
    Client::new()
}

pub async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> anyhow::Result<T> {
    let resp = req.send().await.context("request failed")?;
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(anyhow::anyhow!("request failed ({}): {}", status, describe_error(&text)));
    }
    let body = resp.json::<T>().await.context("invalid json response")?;
    Ok(body)
}

/// 서버 에러 본문을 한 줄 메시지로
fn describe_error(text: &str) -> String {
    let Ok(body) = serde_json::from_str::<ErrorBody>(text) else {
        return text.to_string();
    };

    let mut message = body.message;
    if let Some(fields) = body.invalid_fields {
        message.push_str(&format!(" [invalid: {}]", fields.join(", ")));
    }
    if let Some(details) = body.details {
        message.push_str(&format!(" ({})", details));
    }
    message
}
