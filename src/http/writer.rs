use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

/// Writes a serialized response to the stream and flushes it.
///
/// The whole response is buffered up front ([`Response::to_bytes`]); memory
/// use is bounded by the largest servable asset.
pub async fn send(stream: &mut TcpStream, response: &Response) -> anyhow::Result<()> {
    stream.write_all(&response.to_bytes()).await?;
    stream.flush().await?;
    Ok(())
}
