//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use base64::{prelude::BASE64_STANDARD, Engine};
    use jhc2html::core::pack;
    use jhc2html::utils::url::create_data_url;

    use crate::site;

    const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn stylesheet_without_base64() {
        let dir = site(&[
            (
                "index.html",
                br#"<html><head><link rel="stylesheet" href="style.css"></head></html>"#,
            ),
            ("style.css", b"body{color:red}"),
        ]);

        let packed = pack(&dir.path().join("index.html"), false).unwrap();

        assert!(packed.contains("<style>\nbody{color:red}\n</style>"));
        assert!(!packed.contains("<link"));
    }

    #[test]
    fn stylesheet_content_is_byte_for_byte() {
        let css = "/* ünïcødé */\n.a > .b { content: \"</x>\"; }\n";
        let dir = site(&[
            ("index.html", br#"<link rel='stylesheet' href='a.css'>"#),
            ("a.css", css.as_bytes()),
        ]);

        let packed = pack(&dir.path().join("index.html"), true).unwrap();

        assert_eq!(packed, format!("\n<style>\n{css}\n</style>\n"));
    }

    #[test]
    fn external_references_are_untouched() {
        let html = concat!(
            r#"<link rel="stylesheet" href="https://fonts.example.com/css">"#,
            r#"<link rel="shortcut icon" href="data:image/png;base64,AAAA">"#,
            r#"<script src="http://cdn.example.com/lib.js"></script>"#,
            r#"<img src="file:///tmp/a.png">"#,
        );
        let dir = site(&[("index.html", html.as_bytes())]);

        for base64 in [false, true] {
            let packed = pack(&dir.path().join("index.html"), base64).unwrap();
            assert_eq!(packed, html);
        }
    }

    #[test]
    fn image_becomes_data_uri() {
        let dir = site(&[
            ("index.html", br#"<body><img src="logo.png"></body>"#),
            ("logo.png", PNG_BYTES),
        ]);

        let packed = pack(&dir.path().join("index.html"), true).unwrap();

        assert_eq!(
            packed,
            format!(
                r#"<body><img src="data:image/png;base64,{}"></body>"#,
                BASE64_STANDARD.encode(PNG_BYTES)
            )
        );
    }

    #[test]
    fn images_untouched_without_base64() {
        let html = r#"<link rel="shortcut icon" href="favicon.ico"><img src="logo.png">"#;
        let dir = site(&[("index.html", html.as_bytes())]);

        let packed = pack(&dir.path().join("index.html"), false).unwrap();

        assert_eq!(packed, html);
    }

    #[test]
    fn nested_stylesheet_assets_resolve_from_stylesheet_dir() {
        let dir = site(&[
            (
                "index.html",
                br#"<link rel="stylesheet" href="css/main.css"><p>img/bg.png</p>"#,
            ),
            ("css/main.css", b"body{background:url(img/bg.png)}"),
            ("css/img/bg.png", PNG_BYTES),
        ]);

        let packed = pack(&dir.path().join("index.html"), true).unwrap();
        let data_url = create_data_url(&dir.path().join("css/img/bg.png")).unwrap();

        assert!(packed.contains(&format!("body{{background:url(\"{data_url}\")}}")));
        assert!(packed.contains("<p>img/bg.png</p>"));
    }

    #[test]
    fn fonts_in_stylesheet_are_embedded() {
        let dir = site(&[
            ("game/index.html", br#"<link rel="stylesheet" href="../shared/fonts.css">"#),
            (
                "shared/fonts.css",
                b"@font-face{font-family:Pixel;src:url(\"fonts/pixel.ttf\")}",
            ),
            ("shared/fonts/pixel.ttf", b"\x00\x01\x00\x00"),
        ]);

        let packed = pack(&dir.path().join("game/index.html"), true).unwrap();

        assert!(packed.contains(r#"src:url("data:font/opentype;base64,AAEAAA==")"#));
    }

    #[test]
    fn image_path_inside_inlined_script_is_embedded() {
        let dir = site(&[
            (
                "index.html",
                br#"<img src="sprites/hero.gif"><script src="game.js"></script>"#,
            ),
            ("game.js", b"sprite.src = \"sprites/hero.gif\";"),
            ("sprites/hero.gif", b"GIF89a"),
        ]);

        let packed = pack(&dir.path().join("index.html"), true).unwrap();

        assert!(!packed.contains("sprites/hero.gif"));
        assert_eq!(packed.matches("data:image/gif;base64,R0lGODlh").count(), 2);
        assert!(packed.contains("\n<script>\nsprite.src = \"data:image/gif;base64,R0lGODlh\";\n</script>\n"));
    }

    #[test]
    fn icon_becomes_data_uri() {
        let dir = site(&[
            ("index.html", br#"<link rel="shortcut icon" href="favicon.ico">"#),
            ("favicon.ico", b"\x00\x00\x01\x00"),
        ]);

        let packed = pack(&dir.path().join("index.html"), true).unwrap();

        assert_eq!(
            packed,
            r#"<link rel="shortcut icon" href="data:image/ico;base64,AAABAA==">"#
        );
    }

    #[test]
    fn root_relative_reference_stays_in_base_dir() {
        let dir = site(&[
            ("index.html", br#"<script src="/js/app.js"></script>"#),
            ("js/app.js", b"start();"),
        ]);

        let packed = pack(&dir.path().join("index.html"), false).unwrap();

        assert_eq!(packed, "\n<script>\nstart();\n</script>\n");
    }

    #[test]
    fn malformed_tags_pass_through() {
        let html = concat!(
            r#"<link rel="stylesheet">"#,
            r#"<link rel="stylesheet" href=style.css>"#,
            r#"<script src="x.js"> </script>"#,
            r#"<img src="a.png"#,
        );
        let dir = site(&[("index.html", html.as_bytes())]);

        let packed = pack(&dir.path().join("index.html"), true).unwrap();

        assert_eq!(packed, html);
    }

    #[test]
    fn data_uri_round_trip() {
        let bytes: Vec<u8> = (0..=255).collect();
        let dir = site(&[("blob.woff", &bytes)]);

        let data_url = create_data_url(&dir.path().join("blob.woff")).unwrap();
        let encoded = data_url.strip_prefix("data:font/woff;base64,").unwrap();

        assert_eq!(BASE64_STANDARD.decode(encoded).unwrap(), bytes);
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use jhc2html::core::{pack, PackError};

    use crate::site;

    #[test]
    fn missing_source_document() {
        let dir = site(&[]);
        let result = pack(&dir.path().join("index.html"), false);

        assert!(matches!(result, Err(PackError::Read { .. })));
    }

    #[test]
    fn missing_script() {
        let dir = site(&[("index.html", br#"<script src="missing.js"></script>"#)]);
        let result = pack(&dir.path().join("index.html"), false);

        match result {
            Err(PackError::Read { path, .. }) => assert!(path.ends_with("missing.js")),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn missing_css_asset_in_base64_mode() {
        let dir = site(&[
            ("index.html", br#"<link rel="stylesheet" href="a.css">"#),
            ("a.css", b"div{background:url(nope.png)}"),
        ]);

        assert!(pack(&dir.path().join("index.html"), false).is_ok());
        assert!(pack(&dir.path().join("index.html"), true)
            .unwrap_err()
            .is_read_error());
    }
}
