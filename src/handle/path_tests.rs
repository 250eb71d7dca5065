#[cfg(test)]
mod tests {
    use crate::handle::path::{
        file_name, join, normalize_separators, parent_path, split_extension,
        trim_trailing_separators,
    };

    #[test]
    fn test_normalize_windows_separators() {
        assert_eq!(normalize_separators("dir\\sub\\file.png"), "dir/sub/file.png");
        assert_eq!(normalize_separators("C:\\Users\\me"), "C:/Users/me");
    }

    #[test]
    fn test_normalize_leaves_forward_slashes() {
        assert_eq!(normalize_separators("a/b/c"), "a/b/c");
        assert_eq!(normalize_separators(""), "");
    }

    #[test]
    fn test_trim_trailing_separators() {
        let test_cases = vec![
            ("a/b/", "a/b"),
            ("a/b//", "a/b"),
            ("a/b", "a/b"),
            ("/", "/"),
            ("///", "/"),
            ("", ""),
        ];

        for (input, expected) in test_cases {
            assert_eq!(trim_trailing_separators(input), expected, "Failed for {:?}", input);
        }
    }

    #[test]
    fn test_file_name() {
        let test_cases = vec![
            ("a/b/c.txt", "c.txt"),
            ("c.txt", "c.txt"),
            ("a/b/", "b"),
            ("/etc", "etc"),
            ("/", ""),
            ("", ""),
        ];

        for (input, expected) in test_cases {
            assert_eq!(file_name(input), expected, "Failed for {:?}", input);
        }
    }

    #[test]
    fn test_parent_path() {
        let test_cases = vec![
            ("a/b/c.txt", Some("a/b")),
            ("a/b/", Some("a")),
            ("/etc", Some("/")),
            ("/etc/hosts", Some("/etc")),
            ("file", None),
            ("/", None),
            ("", None),
        ];

        for (input, expected) in test_cases {
            assert_eq!(parent_path(input), expected, "Failed for {:?}", input);
        }
    }

    #[test]
    fn test_split_extension_uses_last_dot() {
        assert_eq!(split_extension("a.tar.gz"), Some(("a.tar", "gz")));
        assert_eq!(split_extension("file.png"), Some(("file", "png")));
        assert_eq!(split_extension(".gitignore"), Some(("", "gitignore")));
        assert_eq!(split_extension("trailing."), Some(("trailing", "")));
        assert_eq!(split_extension("Makefile"), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "file"), "file");
        assert_eq!(join("dir", "file"), "dir/file");
        assert_eq!(join("dir/", "file"), "dir/file");
        assert_eq!(join("/", "etc"), "/etc");
    }
}
