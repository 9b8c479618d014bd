/// Maps a filename's last `.`-delimited suffix to a content type.
///
/// Case-sensitive exact match over the handful of types this server
/// knows; anything else, including a missing suffix, is served as
/// `application/octet-stream`.
pub fn resolve(filename: &str) -> &'static str {
    match filename.rsplit_once('.') {
        Some((_, "html")) => "text/html",
        Some((_, "jpg")) => "image/jpeg",
        Some((_, "gif")) => "image/gif",
        Some((_, "text")) | Some((_, "txt")) => "text/plain",
        _ => "application/octet-stream",
    }
}
