//! README banner block injection.

/// Relative path where the banner asset is written inside the workspace.
pub const BANNER_ASSET_PATH: &str = "assets/banner.png";

/// Insert or replace the banner image block at the top of a README.
///
/// A leading markdown image reference is replaced up to the first blank line
/// (first match only); any other content is preserved and the block is
/// prepended. Applying this twice yields the same result as applying it once.
pub fn inject_banner(content: &str, name: &str) -> String {
    let block = format!("![{name}]({BANNER_ASSET_PATH})\n\n");

    if content.starts_with("![") {
        match content.find("\n\n") {
            Some(end) => format!("{block}{}", &content[end + 2..]),
            None => block,
        }
    } else {
        format!("{block}{content}")
    }
}
