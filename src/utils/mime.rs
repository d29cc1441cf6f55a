//! 文件扩展名到 data URI 前缀的静态映射表

/// Extension → data URI prefix pairs, searched in order.
///
/// Matching is a case-sensitive suffix match on the file name, first entry wins.
pub const MIME_TYPES: &[(&str, &str)] = &[
    // Image
    (".jpeg", "data:image/jpeg;base64,"),
    (".jpg", "data:image/jpeg;base64,"),
    (".gif", "data:image/gif;base64,"),
    (".png", "data:image/png;base64,"),
    (".ico", "data:image/ico;base64,"),
    (".svg", "data:image/svg;base64,"),
    // Text
    (".html", "data:text/html;base64,"),
    (".htm", "data:text/html;base64,"),
    (".js", "data:text/javascript;base64,"),
    (".css", "data:text/css;base64,"),
    (".xml", "data:text/xml;base64,"),
    (".json", "data:text/json;base64,"),
    // Font
    (".ttf", "data:font/opentype;base64,"),
    (".woff", "data:font/woff;base64,"),
];

/// Looks up the data URI prefix for a file name, `None` for unknown extensions
pub fn mime_prefix_for(file_name: &str) -> Option<&'static str> {
    MIME_TYPES
        .iter()
        .find(|(extension, _)| file_name.ends_with(extension))
        .map(|(_, prefix)| *prefix)
}
