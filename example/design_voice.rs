mod reg_log;

use crate::reg_log::reg_log;
use std::error::Error;
use std::io;
use voice_design_rs::config::ClientConfig;
use voice_design_rs::design_api::{ElevenLabs, VoiceDesignRequest};
use voice_design_rs::preview::design_and_save;

const MODEL_ID: &str = "eleven_multilingual_ttv_v2";

const VOICE_DESCRIPTION: &str = "A deep, resonant and calm voice with a commanding presence. \
    Measured, deliberate pacing with clear articulation and well placed pauses. \
    Warm and encouraging, rising to passionate conviction on key phrases.";

const SAMPLE_TEXT: &str = "Friends, today we take another step forward together. \
    Our goal is simple: a future that is open, fair and full of opportunity for everyone. \
    Every project we start is part of a larger story of progress, \
    and I ask each of you to help write it.";

fn main() -> Result<(), Box<dyn Error>> {
    reg_log()?;

    let api = ElevenLabs::new(ClientConfig::from_env()?)?;
    let request = VoiceDesignRequest::new(MODEL_ID, VOICE_DESCRIPTION, SAMPLE_TEXT);
    design_and_save(&api, &request, ".", &mut io::stdout().lock())?;

    Ok(())
}
