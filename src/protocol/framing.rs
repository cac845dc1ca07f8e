use std::io::ErrorKind;
use log::trace;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::config::enums::wire_encoding::WireEncoding;
use crate::protocol::encoding::encoder::{decode, encode};
use crate::protocol::enums::protocol_error::ProtocolError;

pub const FRAME_HEADER_SIZE: usize = 4;

pub async fn read_frame<R>(reader: &mut R, max_frame_size: usize) -> Result<Vec<u8>, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    let size = match reader.read_u32().await {
        Ok(size) => size as usize,
        Err(error) if error.kind() == ErrorKind::UnexpectedEof => return Err(ProtocolError::ConnectionClosed),
        Err(error) => return Err(ProtocolError::Io(error)),
    };
    if size > max_frame_size {
        return Err(ProtocolError::FrameTooLarge { size, limit: max_frame_size });
    }
    let mut payload = vec![0u8; size];
    match reader.read_exact(&mut payload).await {
        Ok(_) => {}
        Err(error) if error.kind() == ErrorKind::UnexpectedEof => return Err(ProtocolError::ConnectionClosed),
        Err(error) => return Err(ProtocolError::Io(error)),
    }
    trace!("[FRAME] Read {} bytes", size);
    Ok(payload)
}

pub async fn write_frame<W>(writer: &mut W, payload: &[u8], max_frame_size: usize) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
{
    if payload.len() > max_frame_size || payload.len() > u32::MAX as usize {
        return Err(ProtocolError::FrameTooLarge { size: payload.len(), limit: max_frame_size });
    }
    let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(payload);
    writer.write_all(&frame).await?;
    writer.flush().await?;
    trace!("[FRAME] Wrote {} bytes", payload.len());
    Ok(())
}

pub async fn read_message<T, R>(reader: &mut R, encoding: &WireEncoding, max_frame_size: usize) -> Result<T, ProtocolError>
where
    T: DeserializeOwned,
    R: AsyncRead + Unpin,
{
    let payload = read_frame(reader, max_frame_size).await?;
    Ok(decode(encoding, &payload)?)
}

pub async fn write_message<T, W>(writer: &mut W, encoding: &WireEncoding, message: &T, max_frame_size: usize) -> Result<(), ProtocolError>
where
    T: Serialize,
    W: AsyncWrite + Unpin,
{
    let payload = encode(encoding, message)?;
    write_frame(writer, &payload, max_frame_size).await
}
