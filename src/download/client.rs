use std::io::Read;

use crate::consts::{DOWNLOAD_TIMEOUT, USER_AGENT};
use crate::error::DownloadError;

use super::Fetcher;

/// Blocking HTTP fetcher backed by a `ureq` agent
pub(crate) struct UreqFetcher {
    agent: ureq::Agent,
}

impl UreqFetcher {
    pub(crate) fn new() -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(DOWNLOAD_TIMEOUT))
            .build()
            .into();
        Self::from_agent(agent)
    }

    pub(crate) fn from_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Fetcher for UreqFetcher {
    fn fetch(&self, url: &str, session: &str) -> Result<Box<dyn Read>, DownloadError> {
        let response = self
            .agent
            .get(url)
            .header("Cookie", format!("session={session}"))
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => DownloadError::Status { code },
                other => DownloadError::Request(other.to_string()),
            })?;

        Ok(Box::new(response.into_body().into_reader()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve a single canned response on localhost, returning the base URL
    /// and a handle yielding the raw request head.
    fn serve_once(status_line: &'static str, body: &'static [u8]) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let mut response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .into_bytes();
            response.extend_from_slice(body);
            // The client may hang up early on error statuses
            let _ = stream.write_all(&response);
            String::from_utf8_lossy(&head).into_owned()
        });
        (format!("http://{addr}"), handle)
    }

    fn local_fetcher() -> UreqFetcher {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .proxy(None)
            .timeout_global(Some(DOWNLOAD_TIMEOUT))
            .build()
            .into();
        UreqFetcher::from_agent(agent)
    }

    #[test]
    fn sends_session_cookie_and_returns_body() {
        let (base, server) = serve_once("200 OK", b"3   4\n4   3\n");

        let mut body = local_fetcher()
            .fetch(&format!("{base}/2024/day/1/input"), "abc123")
            .unwrap();
        let mut received = Vec::new();
        body.read_to_end(&mut received).unwrap();

        assert_eq!(received, b"3   4\n4   3\n");
        let head = server.join().unwrap().to_lowercase();
        assert!(head.starts_with("get /2024/day/1/input http/1.1"), "{head}");
        assert!(head.contains("cookie: session=abc123\r\n"), "{head}");
        assert!(head.contains("user-agent: aoc-input/"), "{head}");
    }

    #[test]
    fn non_success_status_is_an_error() {
        let (base, server) = serve_once("404 Not Found", b"");

        let result = local_fetcher().fetch(&format!("{base}/2024/day/26/input"), "abc123");

        assert!(matches!(result, Err(DownloadError::Status { code: 404 })));
        server.join().unwrap();
    }

    #[test]
    fn connection_failure_is_a_request_error() {
        // Bind then drop to get a port nothing listens on
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

        let result = local_fetcher().fetch(&format!("http://{addr}/2024/day/1/input"), "abc123");

        assert!(matches!(result, Err(DownloadError::Request(_))));
    }
}
