//! Tests for the HTTP request decoder.

#[cfg(test)]
mod tests {
    use crate::parser::{Method, Error, parse_request};

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.version.as_deref(), Some("HTTP/1.1"));
        assert_eq!(result.headers.get("Host").unwrap(), "example.com");
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_parse_request_with_multiple_headers() {
        let request = b"GET /user-agent HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: curl/7.64.1\r\nAccept: */*\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.headers.len(), 3);
        assert_eq!(result.header("Host"), Some("localhost:4221"));
        assert_eq!(result.header("User-Agent"), Some("curl/7.64.1"));
        assert_eq!(result.header("Accept"), Some("*/*"));
    }

    #[test]
    fn test_repeated_header_values_are_concatenated() {
        let request = b"GET / HTTP/1.1\r\nFoo: bar\r\nFoo: baz\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.header("Foo"), Some("barbaz"));
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let request = b"GET / HTTP/1.1\r\nhost: a\r\nHost: b\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.header("host"), Some("a"));
        assert_eq!(result.header("Host"), Some("b"));
        assert_eq!(result.header("HOST"), None);
    }

    #[test]
    fn test_header_without_separator_is_ignored() {
        let request = b"GET / HTTP/1.1\r\nInvalidHeader\r\nNoSpace:value\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.headers.len(), 1);
        assert_eq!(result.header("Host"), Some("example.com"));
    }

    #[test]
    fn test_header_split_on_first_separator_only() {
        let request = b"GET / HTTP/1.1\r\nX-Test: value: with: separators\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.header("X-Test"), Some("value: with: separators"));
    }

    #[test]
    fn test_header_value_is_not_trimmed() {
        let request = b"GET / HTTP/1.1\r\nX-Test:  padded \r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.header("X-Test"), Some(" padded "));
    }

    #[test]
    fn test_body_after_blank_line() {
        let request = b"POST /files/note.txt HTTP/1.1\r\nContent-Length: 4\r\n\r\ndata";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::POST);
        assert_eq!(result.body, b"data");
    }

    #[test]
    fn test_body_keeps_crlf_and_blank_lines() {
        let request = b"POST /files/a HTTP/1.1\r\n\r\nline one\r\n\r\nline: two\r\n";
        let result = parse_request(request).unwrap();
        assert!(result.headers.is_empty());
        assert_eq!(result.body, b"line one\r\n\r\nline: two\r\n");
    }

    #[test]
    fn test_body_keeps_non_utf8_bytes() {
        let request = b"POST /files/bin HTTP/1.1\r\n\r\n\x00\xff\xfe";
        let result = parse_request(request).unwrap();
        assert_eq!(result.body, vec![0x00, 0xff, 0xfe]);
    }

    #[test]
    fn test_missing_blank_line_gives_empty_body() {
        let request = b"GET /echo/abc HTTP/1.1\r\nHost: example.com";
        let result = parse_request(request).unwrap();
        assert_eq!(result.header("Host"), Some("example.com"));
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_start_line_only() {
        let result = parse_request(b"GET /").unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/");
        assert_eq!(result.version, None);
        assert!(result.headers.is_empty());
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_bare_newline_is_not_a_line_break() {
        let request = b"GET / HTTP/1.1\nHost: example.com\n\nbody";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path, "/");
        assert_eq!(result.version.as_deref(), Some("HTTP/1.1\nHost:"));
        assert!(result.headers.is_empty());
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_double_space_yields_empty_path() {
        let request = b"GET  /index.html HTTP/1.1\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path, "");
        assert_eq!(result.version.as_deref(), Some("/index.html"));
    }

    #[test]
    fn test_start_line_round_trip() {
        let requests: [&[u8]; 4] = [
            b"GET / HTTP/1.1\r\n\r\n",
            b"POST /files/note.txt HTTP/1.1\r\n\r\ndata",
            b"GET /echo/a/b?c=d HTTP/1.1\r\nHost: x\r\n\r\n",
            b"BREW /pot HTTP/1.1\r\n\r\n",
        ];

        for request in requests {
            let result = parse_request(request).unwrap();
            let line = std::str::from_utf8(request).unwrap().split("\r\n").next().unwrap();
            assert!(line.starts_with(&format!("{} ", result.start_line())));
        }
    }

    #[test]
    fn test_unknown_method_is_kept() {
        let result = parse_request(b"BREW /pot HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(result.method, Method::Other("BREW".to_string()));
        assert_eq!(result.method.to_string(), "BREW");
    }

    #[test]
    fn test_methods_are_case_sensitive() {
        let result = parse_request(b"get / HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(result.method, Method::Other("get".to_string()));
    }

    #[test]
    fn test_empty_request() {
        let result = parse_request(b"");
        assert!(matches!(result, Err(Error::EmptyRequest)));
    }

    #[test]
    fn test_incomplete_request_line() {
        let result = parse_request(b"GET\r\nHost: example.com\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(ref line)) if line == "GET"));
    }

    #[test]
    fn test_blank_request_line() {
        let result = parse_request(b"\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_user_agent_scan() {
        let request = b"GET /user-agent HTTP/1.1\r\nHost: x\r\nUser-Agent: test-client/1.0\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.user_agent().as_deref(), Some("test-client/1.0"));
    }

    #[test]
    fn test_user_agent_without_space_and_padded() {
        let request = b"GET /user-agent HTTP/1.1\r\nUser-Agent:\t spaced/2 \r\n\r\n";
        let result = parse_request(request).unwrap();
        // Not stored as a header, but still found by the line scan
        assert_eq!(result.header("User-Agent"), None);
        assert_eq!(result.user_agent().as_deref(), Some("spaced/2"));
    }

    #[test]
    fn test_user_agent_first_match_wins() {
        let request = b"GET /user-agent HTTP/1.1\r\nUser-Agent: first\r\nUser-Agent: second\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.header("User-Agent"), Some("firstsecond"));
        assert_eq!(result.user_agent().as_deref(), Some("first"));
    }

    #[test]
    fn test_user_agent_prefix_is_case_sensitive() {
        let request = b"GET /user-agent HTTP/1.1\r\nuser-agent: lower\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.user_agent(), None);
    }

    #[test]
    fn test_user_agent_absent() {
        let result = parse_request(b"GET /user-agent HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
        assert_eq!(result.user_agent(), None);
    }

    #[test]
    fn test_request_is_independent_of_input_buffer() {
        let mut buffer = b"POST /files/a.txt HTTP/1.1\r\nUser-Agent: ua\r\n\r\nabc".to_vec();
        let request = parse_request(&buffer).unwrap();
        buffer.fill(0);
        assert_eq!(request.start_line(), "POST /files/a.txt");
        assert_eq!(request.body, b"abc");
        assert_eq!(request.user_agent().as_deref(), Some("ua"));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Method::POST.to_string(), "POST");
        assert_eq!(Method::PUT.to_string(), "PUT");
        assert_eq!(Method::DELETE.to_string(), "DELETE");
        assert_eq!(Method::HEAD.to_string(), "HEAD");
        assert_eq!(Method::OPTIONS.to_string(), "OPTIONS");
        assert_eq!(Method::PATCH.to_string(), "PATCH");
    }
}
