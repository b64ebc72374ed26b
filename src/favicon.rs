use {
    log::debug,
    std::{
        fs,
        io::{self, Write},
        path::Path,
    },
};


/// 書き出し先. 既存のファイルは上書きされる.
pub const FAVICON_PATH: &str = "/home/leoson/leosonh.github.io/img/favicon.svg";

/// `SVG_FAVICON` は 32x32 の背景 `#BD5D38` に白の太字 "L" を中央に置いた仮 favicon を表す.
///
/// 出力はこのバイト列と完全に一致する. 末尾に改行は付かない.
pub const SVG_FAVICON: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    "\n",
    r#"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg">"#,
    "\n",
    r##"  <rect width="32" height="32" fill="#BD5D38"/>"##,
    "\n",
    // trailing space is part of the output
    r#"  <text x="16" y="20" font-family="Arial, sans-serif" font-size="18" font-weight="bold" "#,
    "\n",
    r#"        text-anchor="middle" fill="white">L</text>"#,
    "\n",
    "</svg>",
);

const STATUS_LINES: [&str; 2] = [
    "Created temporary SVG favicon with 'L' initial",
    "Note: For best results, create proper PNG/ICO favicons using an image editor or online tool",
];

/// [`SVG_FAVICON`] を [`FAVICON_PATH`] に書き出す.
pub fn write_favicon() -> io::Result<()> {
    write_favicon_to(FAVICON_PATH)
}

/// [`SVG_FAVICON`] を `path` に書き出す. 親ディレクトリが無ければそのままエラーを返す.
pub fn write_favicon_to(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    debug!("writing {} bytes to {}", SVG_FAVICON.len(), path.display());
    fs::write(path, SVG_FAVICON)
}

pub fn report(mut out: impl Write) -> io::Result<()> {
    for line in STATUS_LINES {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
