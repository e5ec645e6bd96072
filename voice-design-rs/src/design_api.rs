use log::{debug, trace};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::util::gen_request_id;
use crate::{Error, Result};

const DESIGN_PATH: &str = "/v1/text-to-voice/design";

pub trait VoiceDesign {
    /// ask the service for preview voices matching the request
    fn design(&self, request: &VoiceDesignRequest) -> Result<VoiceDesignResponse>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceDesignRequest {
    /// # refer
    /// https://elevenlabs.io/docs/api-reference/text-to-voice/design
    pub model_id: String,
    /// free text, length limits are enforced by the service
    pub voice_description: String,
    /// what the previews will say
    pub text: String,
    /// let the service write its own sample text, `text` is then ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_generate_text: Option<bool>,
    /// # scale
    /// -1 (quietest) to 1 (loudest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loudness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// how strictly the description is followed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f32>,
    /// sent as a query parameter, e.g. `mp3_44100_192`
    #[serde(skip)]
    pub output_format: Option<String>,
}

impl VoiceDesignRequest {
    pub fn new(
        model_id: impl Into<String>,
        voice_description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            voice_description: voice_description.into(),
            text: text.into(),
            auto_generate_text: None,
            loudness: None,
            seed: None,
            guidance_scale: None,
            output_format: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VoiceDesignResponse {
    pub previews: Vec<VoicePreview>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VoicePreview {
    pub generated_voice_id: String,
    pub audio_base_64: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<f64>,
    #[serde(default)]
    pub language: Option<String>,
}

pub struct ElevenLabs {
    config: ClientConfig,
    client: Client,
}

impl ElevenLabs {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| Error::InvalidConfig("api key is not a valid header value".into()))?;
        key.set_sensitive(true);
        headers.insert("xi-api-key", key);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    pub(crate) fn design_url(&self) -> String {
        format!("{}{}", self.config.base_url, DESIGN_PATH)
    }
}

impl VoiceDesign for ElevenLabs {
    fn design(&self, request: &VoiceDesignRequest) -> Result<VoiceDesignResponse> {
        let request_id = gen_request_id();
        debug!(
            "designing voice with model {} ({} chars of description)",
            request.model_id,
            request.voice_description.chars().count()
        );
        trace!("request {} -> {}", request_id, self.design_url());

        let mut builder = self.client.post(self.design_url()).json(request);
        if let Some(format) = &request.output_format {
            builder = builder.query(&[("output_format", format)]);
        }
        let resp = builder.send()?;

        let status = resp.status();
        trace!("request {} <- {}", request_id, status);
        if !status.is_success() {
            let body = resp.text()?;
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let designed: VoiceDesignResponse = resp.json()?;
        debug!("service returned {} previews", designed.previews.len());
        Ok(designed)
    }
}
