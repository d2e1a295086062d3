use iced::futures::channel::mpsc;
use iced::futures::{SinkExt, Stream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::protocol::{InboundMessage, parse_inbound};

const CHANNEL_CAPACITY: usize = 100;

/// Stream host messages read line by line from stdin.
///
/// Malformed lines are logged and skipped. The stream ends with stdin.
pub(crate) fn listen() -> impl Stream<Item = InboundMessage> {
    iced::stream::channel(
        CHANNEL_CAPACITY,
        move |mut output: mpsc::Sender<InboundMessage>| async move {
            let stdin = BufReader::new(tokio::io::stdin());
            forward_lines(stdin, &mut output).await;
        },
    )
}

/// Decode every line of `reader` into `output` until EOF, a read error or a
/// closed receiver.
async fn forward_lines<R>(reader: R, output: &mut mpsc::Sender<InboundMessage>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_inbound(&line) {
                    Ok(message) => {
                        if output.send(message).await.is_err() {
                            break;
                        }
                    },
                    Err(err) => {
                        log::warn!("skipping malformed host message: {err}")
                    },
                }
            },
            Ok(None) => {
                log::info!("host closed stdin");
                break;
            },
            Err(err) => {
                log::warn!("failed to read host message: {err}");
                break;
            },
        }
    }
}
