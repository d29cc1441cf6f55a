//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use jhc2html::core::PackRequest;

    use crate::{read, site};

    #[test]
    fn keeps_document_in_memory_without_output() {
        let dir = site(&[("index.html", b"<p>hi</p>")]);
        let outcome = PackRequest::new(dir.path().join("index.html"), true)
            .execute()
            .unwrap();

        assert_eq!(outcome.document, "<p>hi</p>");
        assert_eq!(outcome.destination, None);
    }

    #[test]
    fn writes_output_file() {
        let dir = site(&[
            ("index.html", br#"<script src="a.js"></script>"#),
            ("a.js", b"go()"),
        ]);
        let output = dir.path().join("packed.html");

        let outcome = PackRequest::new(dir.path().join("index.html"), false)
            .with_output(output.to_string_lossy())
            .execute()
            .unwrap();

        assert_eq!(outcome.destination.as_deref(), Some(output.as_path()));
        assert_eq!(read(&output), "\n<script>\ngo()\n</script>\n");
    }

    #[test]
    fn substitutes_title_in_output_path() {
        let dir = site(&[("index.html", b"<title>Snake: Reloaded</title>")]);
        let template = dir.path().join("%title%.%extension%");

        let outcome = PackRequest::new(dir.path().join("index.html"), false)
            .with_output(template.to_string_lossy())
            .execute()
            .unwrap();

        let expected = dir.path().join("Snake -  Reloaded.html");
        assert_eq!(outcome.destination.as_deref(), Some(expected.as_path()));
        assert!(expected.exists());
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
    use jhc2html::core::{PackError, PackRequest};

    use crate::site;

    #[test]
    fn no_partial_output_on_read_error() {
        let dir = site(&[("index.html", br#"<img src="gone.png">"#)]);
        let output = dir.path().join("packed.html");

        let result = PackRequest::new(dir.path().join("index.html"), true)
            .with_output(output.to_string_lossy())
            .execute();

        assert!(matches!(result, Err(PackError::Read { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_destination() {
        let dir = site(&[("index.html", b"<p></p>")]);
        let output = dir.path().join("no/such/dir/packed.html");

        let result = PackRequest::new(dir.path().join("index.html"), false)
            .with_output(output.to_string_lossy())
            .execute();

        assert!(matches!(result, Err(PackError::Write { .. })));
    }
}
