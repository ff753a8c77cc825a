use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_head(resp: &Response) -> Vec<u8> {
    // Status line, content-type line, blank separator line.
    format!(
        "{} {} {}\r\nContent-type: {}\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        resp.content_type,
    )
    .into_bytes()
}

pub struct ResponseWriter {
    response: Response,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    /// Writes the head, then the body. A file body is copied to the socket
    /// through a buffer, binary-safe and regardless of size, and its handle
    /// is released as soon as the copy ends.
    pub async fn write_to_stream<W>(self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        stream.write_all(&serialize_head(&self.response)).await?;

        match self.response.body {
            Body::Literal(html) => stream.write_all(html.as_bytes()).await?,
            Body::File(mut file) => {
                tokio::io::copy(&mut file, stream).await?;
            }
        }

        stream.flush().await?;
        Ok(())
    }
}
