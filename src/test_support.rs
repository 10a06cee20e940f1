//! Canned network peers shared by the unit tests.
use std::future::Future;
use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream, UdpSocket};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub(crate) const SAMPLE_BODY: &str = "# pxname,svname,qcur,qmax,scur,smax,rate,rate_max,hrsp_1xx,hrsp_2xx,hrsp_3xx,hrsp_4xx,hrsp_5xx,bin,bout,\n\
web,FRONTEND,,,3,10,1,5,0,120,4,2,1,4096,8192,\n\
web,app1,0,2,1,4,0,3,0,60,2,1,0,2048,4096,\n\
web,BACKEND,0,2,1,4,0,3,0,60,2,1,0,2048,4096,\n";

pub(crate) const RECV_TIMEOUT: Duration = Duration::from_secs(2);
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(10);

pub(crate) fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

/// Stats page stub; stops accepting when dropped.
pub(crate) struct StatsServer {
    pub(crate) url: String,
    pub(crate) requests: mpsc::Receiver<String>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for StatsServer {
    fn drop(&mut self) {
        drop(self.shutdown.send(()));
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Answers every request with `status_line` and `body`.
pub(crate) fn spawn_stats_server(
    status_line: &'static str,
    body: &'static str,
) -> AppResult<StatsServer> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    listener.set_nonblocking(true)?;
    let (request_tx, request_rx) = mpsc::channel();
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }
            match listener.accept() {
                Ok((stream, _)) => {
                    if let Some(request) = answer(stream, status_line, body) {
                        drop(request_tx.send(request));
                    }
                }
                Err(err) if err.kind() == ErrorKind::WouldBlock => {
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                }
                Err(_) => break,
            }
        }
    });

    Ok(StatsServer {
        url: format!("http://{}/;csv", addr),
        requests: request_rx,
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

fn answer(mut stream: TcpStream, status_line: &str, body: &str) -> Option<String> {
    stream.set_nonblocking(false).ok()?;
    stream.set_read_timeout(Some(RECV_TIMEOUT)).ok()?;
    let mut buffer = [0_u8; 4096];
    let read = stream.read(&mut buffer).ok()?;
    let request = String::from_utf8_lossy(buffer.get(..read)?).into_owned();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).ok()?;
    drop(stream.flush());
    drop(stream.shutdown(Shutdown::Both));
    Some(request)
}

/// A local statsd stand-in; returns the socket and its port.
pub(crate) fn bind_collector() -> AppResult<(UdpSocket, u16)> {
    let socket = UdpSocket::bind("127.0.0.1:0")?;
    socket.set_read_timeout(Some(RECV_TIMEOUT))?;
    let port = socket.local_addr()?.port();
    Ok((socket, port))
}

/// Reads exactly `expected` datagrams or fails on timeout.
pub(crate) fn drain(socket: &UdpSocket, expected: usize) -> AppResult<Vec<String>> {
    let mut buf = [0_u8; 2048];
    let mut lines = Vec::with_capacity(expected);
    for _ in 0..expected {
        let (read, _) = socket.recv_from(&mut buf).map_err(|err| {
            AppError::validation(format!(
                "Received {} of {} datagrams: {}",
                lines.len(),
                expected,
                err
            ))
        })?;
        let payload = buf.get(..read).unwrap_or_default();
        lines.push(String::from_utf8_lossy(payload).into_owned());
    }
    Ok(lines)
}

/// Succeeds when nothing arrives within a short window.
pub(crate) fn expect_silence(socket: &UdpSocket) -> AppResult<()> {
    socket.set_read_timeout(Some(Duration::from_millis(200)))?;
    let mut buf = [0_u8; 2048];
    match socket.recv_from(&mut buf) {
        Ok((read, _)) => Err(AppError::validation(format!(
            "Unexpected datagram: {}",
            String::from_utf8_lossy(buf.get(..read).unwrap_or_default())
        ))),
        Err(_) => Ok(()),
    }
}
