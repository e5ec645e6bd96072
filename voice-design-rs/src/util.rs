use uuid::Uuid;

pub fn gen_request_id() -> String {
    Uuid::new_v4().to_string().replace("-", "")
}

/// Zero-based position in, 1-based file name out.
pub fn preview_file_name(index: usize) -> String {
    format!("voice_preview_{}.mp3", index + 1)
}
