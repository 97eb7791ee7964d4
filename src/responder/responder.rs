use log::{debug, error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio_rustls::TlsAcceptor;
use tokio_shutdown::Shutdown;
use crate::responder::structs::responder_service_data::ResponderServiceData;
use crate::responder::traits::alpn_challenge_handler::AlpnChallengeHandler;
use crate::ssl::ssl::ACME_TLS_ALPN_PROTOCOL;

/// Runs one challenge listener until the shutdown signal fires.
///
/// Each accepted connection gets its own task, so a slow client never holds
/// up the accept loop, and handshakes already in flight complete even after
/// the listener stops accepting.
pub async fn responder_service(
    addr: SocketAddr,
    data: Arc<ResponderServiceData>,
    shutdown: Shutdown,
) -> Result<(), std::io::Error>
{
    info!("[RESPONDER] Starting server listener on {}", addr);
    info!(
        "[RESPONDER] Advertising ALPN protocols acme-tls/1 + {:?}",
        data.responder_config.alpn_protocols
    );
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            error!("[RESPONDER] Unable to bind to {}: {}", addr, error);
            return Err(error);
        }
    };
    let acceptor = TlsAcceptor::from(data.tls_config.clone());

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer_addr)) => {
                        let acceptor = acceptor.clone();
                        let challenge_handler = data.challenge_handler.clone();
                        tokio::spawn(async move {
                            handle_responder_connection(stream, peer_addr, acceptor, challenge_handler).await;
                        });
                    }
                    Err(error) => {
                        error!("[RESPONDER] Listener accept error: {}", error);
                    }
                }
            }
            _ = shutdown.handle() => {
                info!("[RESPONDER] Shutting down listener on {}...", addr);
                return Ok(());
            }
        }
    }
}

/// Terminates TLS for one connection and fires the challenge handler when
/// the validation protocol was negotiated.
pub async fn handle_responder_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    acceptor: TlsAcceptor,
    challenge_handler: Arc<dyn AlpnChallengeHandler>,
)
{
    debug!("[RESPONDER] New TLS connection from {}", peer_addr);
    let mut tls_stream = match acceptor.accept(stream).await {
        Ok(tls_stream) => tls_stream,
        Err(error) => {
            debug!("[RESPONDER] TLS handshake failed from {}: {}", peer_addr, error);
            return;
        }
    };

    let (challenge_negotiated, server_name) = {
        let (_, connection) = tls_stream.get_ref();
        (
            connection.alpn_protocol() == Some(ACME_TLS_ALPN_PROTOCOL),
            connection.server_name().map(|name| name.to_string()),
        )
    };

    if challenge_negotiated {
        challenge_handler.challenge_served(server_name.as_deref());
    } else {
        debug!("[RESPONDER] Non-challenge connection from {} served with fallback identity", peer_addr);
    }

    // A validation connection carries no application data; the handshake
    // itself is the response.
    let _ = tls_stream.shutdown().await;
}
