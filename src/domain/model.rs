use serde::{Deserialize, Serialize};

// 支持的语言 (服务端返回 {"code": "en", "name": "English", ...})
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Language {
    #[serde(rename = "code")]
    pub id: String,
    pub name: String,
}

impl Language {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// POST /translate 请求体
#[derive(Debug, Serialize)]
pub struct TranslationRequest<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub format: &'a str,
}

impl<'a> TranslationRequest<'a> {
    pub fn new(text: &'a str, source: &'a Language, target: &'a Language) -> Self {
        Self {
            q: text,
            source: &source.id,
            target: &target.id,
            format: "text",
        }
    }
}

// 翻译结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Translation {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

// 错误响应体 {"error": "..."}
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
