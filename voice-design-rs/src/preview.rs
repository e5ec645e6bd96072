use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::debug;

use crate::design_api::{VoiceDesign, VoiceDesignRequest, VoicePreview};
use crate::{Error, Result};

pub use crate::util::preview_file_name;

/// decode the preview's base64 payload into raw audio bytes
pub fn decode_audio(preview: &VoicePreview) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(preview.audio_base_64.as_bytes())
}

/// Write every preview to `dir` in the order given and report each file on `out`.
///
/// Stops at the first preview that fails to decode or write. Files written
/// before that point are kept, and a file interrupted mid-write is left as is.
///
/// returns: the written paths, in preview order
pub fn save_previews<W: Write>(
    previews: &[VoicePreview],
    dir: impl AsRef<Path>,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(previews.len());
    for (index, preview) in previews.iter().enumerate() {
        let audio = decode_audio(preview).map_err(|source| Error::Decode { index, source })?;

        let file_name = preview_file_name(index);
        let path = dir.join(&file_name);
        write_file(&path, &audio)?;
        debug!("wrote {} bytes to {}", audio.len(), path.display());

        writeln!(out, "Saved preview: {} as {}", preview.generated_voice_id, file_name)
            .map_err(Error::Output)?;
        written.push(path);
    }
    Ok(written)
}

/// Issue one design request and save whatever previews come back.
pub fn design_and_save<A, W>(
    api: &A,
    request: &VoiceDesignRequest,
    dir: impl AsRef<Path>,
    out: &mut W,
) -> Result<Vec<PathBuf>>
where
    A: VoiceDesign + ?Sized,
    W: Write,
{
    let designed = api.design(request)?;
    save_previews(&designed.previews, dir, out)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    file.flush().map_err(io_err)
}
