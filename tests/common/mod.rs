// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("hvsa_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Canned response for a request path.
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: String) -> Self {
        Self { status: 200, body }
    }
    pub fn status(status: u16) -> Self {
        Self { status, body: format!("<html><body>{status}</body></html>") }
    }
}

/// Minimal HTTP/1.1 stub on 127.0.0.1. `route` maps request path+query to a reply.
/// Returns the base URL. The server thread lives until the test process exits.
pub fn serve<F>(route: F) -> String
where
    F: Fn(&str) -> Reply + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            // drain headers
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) if line == "\r\n" || line == "\n" => break,
                    Ok(_) => {}
                    Err(_) => break,
                }
            }

            let target = request_line.split_whitespace().nth(1).unwrap_or("/");
            let reply = route(target);
            let reason = if reply.status == 200 { "OK" } else { "Error" };
            let head = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                reply.status,
                reason,
                reply.body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(reply.body.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{addr}")
}

/// Routes the fixture site: league page, both standings pages, team page, iCal.
pub fn fixture_site(target: &str) -> Reply {
    if target.contains("leaguePage") {
        Reply::ok(fixture("league_page.html"))
    } else if target.contains("group=101") && target.contains("groupPage") {
        Reply::ok(fixture("standings_men.html"))
    } else if target.contains("group=201") && target.contains("groupPage") {
        Reply::ok(fixture("standings_women.html"))
    } else if target.contains("/ical") {
        Reply::ok("BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n".to_string())
    } else if target.contains("teamPortrait") {
        Reply::ok(fixture("team_page.html"))
    } else {
        Reply::status(404)
    }
}

/// Write a config.toml pointing at `base_url`, returns its path.
pub fn write_config(dir: &PathBuf, base_url: &str, extra_export: &str) -> PathBuf {
    let out = dir.join("out").join("hvsa.ods");
    let text = format!(
        r#"
[hvsa]
year = "2024/25"
league = "West"
teams = ["TSV Wefensleben"]

[net]
base_url = "{base_url}"
timeout_secs = 5

[export]
out = "{}"
{extra_export}
"#,
        out.to_string_lossy().replace('\\', "\\\\")
    );
    let path = dir.join("config.toml");
    fs::write(&path, text).unwrap();
    path
}
