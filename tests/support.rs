use std::ffi::OsStr;
use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream, UdpSocket};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const SAMPLE_BODY: &str = "# pxname,svname,qcur,qmax,scur,smax,rate,rate_max,hrsp_1xx,hrsp_2xx,hrsp_3xx,hrsp_4xx,hrsp_5xx,bin,bout,\n\
web,FRONTEND,,,3,10,1,5,0,120,4,2,1,4096,8192,\n\
web,app1,0,2,1,4,0,3,0,60,2,1,0,2048,4096,\n\
web,BACKEND,0,2,1,4,0,3,0,60,2,1,0,2048,4096,\n";

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a stats page stub answering every request with `status_line`/`body`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_stats_server(
    status_line: &'static str,
    body: &'static str,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream, status_line, body));
                }
                Err(err) if err.kind() == ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/;csv", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream, status_line: &str, body: &str) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 4096];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Bind a UDP socket standing in for statsd.
///
/// # Errors
///
/// Returns an error if the socket cannot be bound.
pub fn bind_collector() -> Result<(UdpSocket, u16), String> {
    let socket =
        UdpSocket::bind("127.0.0.1:0").map_err(|err| format!("bind collector failed: {}", err))?;
    socket
        .set_read_timeout(Some(RECV_TIMEOUT))
        .map_err(|err| format!("set_read_timeout failed: {}", err))?;
    let port = socket
        .local_addr()
        .map_err(|err| format!("collector addr failed: {}", err))?
        .port();
    Ok((socket, port))
}

/// Collect everything that arrives until the socket goes quiet.
#[must_use]
pub fn collect_datagrams(socket: &UdpSocket) -> Vec<String> {
    let mut buf = [0_u8; 2048];
    let mut lines = Vec::new();
    while let Ok((read, _)) = socket.recv_from(&mut buf) {
        lines.push(String::from_utf8_lossy(buf.get(..read).unwrap_or_default()).into_owned());
        if socket
            .set_read_timeout(Some(Duration::from_millis(300)))
            .is_err()
        {
            break;
        }
    }
    lines
}

/// Run the `ha-stats` binary from `dir` and capture output. Inherited
/// configuration variables are cleared so the run only sees `envs`.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_ha_stats<I, S>(dir: &Path, args: I, envs: &[(&str, &str)]) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = ha_stats_bin()?;
    let mut command = Command::new(bin);
    command.current_dir(dir).args(args).env("RUST_LOG", "error");
    for name in [
        "HAPROXY_HOST",
        "HAPROXY_USER",
        "HAPROXY_PASS",
        "STATSD_NAMESPACE",
        "STATSD_HOST",
        "STATSD_PORT",
        "HA_STATS_SLEEP",
        "HA_STATS_LOG",
        "NO_COLOR",
    ] {
        command.env_remove(name);
    }
    for (name, value) in envs {
        command.env(name, value);
    }
    command
        .output()
        .map_err(|err| format!("run ha-stats failed: {}", err))
}

fn ha_stats_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_ha-stats").map_or_else(
        || Err("CARGO_BIN_EXE_ha-stats missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
