// SPDX-License-Identifier: MIT OR Apache-2.0
//! Blocking transport to the host's TCP command port.
//!
//! Each command is sent as one MEL line; the host answers with the result
//! text terminated by a NUL byte. There is no timeout: a host that never
//! answers blocks the caller.

use super::{mel, Command, CommandChannel};
use crate::catalog::Flavor;
use crate::error::ChannelError;
use crate::settings::CommandPortSettings;
use crate::value::Value;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;

/// Command channel over a byte stream, normally a [`TcpStream`]
pub struct CommandPortChannel<S: Read + Write = TcpStream> {
    stream: BufReader<S>,
}

impl CommandPortChannel<TcpStream> {
    /// Connect to a command port at `address`
    pub fn connect(address: &str) -> Result<Self, ChannelError> {
        let stream = TcpStream::connect(address)?;
        tracing::info!("Connected to command port {address}");
        Ok(Self::new(stream))
    }

    /// Connect to the configured command port
    pub fn from_settings(settings: &CommandPortSettings) -> Result<Self, ChannelError> {
        Self::connect(&settings.address())
    }
}

impl<S: Read + Write> CommandPortChannel<S> {
    /// Wrap an already open stream
    pub fn new(stream: S) -> Self {
        Self {
            stream: BufReader::new(stream),
        }
    }

    /// Send one statement and read its NUL-terminated reply
    fn exchange(&mut self, flag: &str, statement: &str) -> Result<String, ChannelError> {
        let writer = self.stream.get_mut();
        writer.write_all(statement.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        let mut reply = Vec::new();
        let read = self.stream.read_until(0, &mut reply)?;
        if read == 0 {
            return Err(ChannelError::Protocol("Command port closed".to_string()));
        }
        let reply = String::from_utf8(reply)
            .map_err(|e| ChannelError::Protocol(format!("Reply is not UTF-8: {e}")))?;

        let text = mel::trim_reply(&reply);
        // Only the framed form is a failure; a bare value may start with "Error".
        if let Some(error) = text.strip_prefix("// ").filter(|rest| rest.starts_with("Error:")) {
            return Err(ChannelError::rejected(flag, error.trim_end_matches(" //")));
        }
        Ok(text.to_string())
    }
}

impl<S: Read + Write> CommandChannel for CommandPortChannel<S> {
    fn call(&mut self, graph: &str, command: &Command) -> Result<Value, ChannelError> {
        let reply = self.exchange(command.flag(), &mel::render(graph, command))?;
        mel::decode_reply(command, &reply)
    }

    fn create_shader(&mut self, name: &str, flavor: Flavor) -> Result<String, ChannelError> {
        let reply = self.exchange("shadingNode", &mel::render_create_shader(name, flavor))?;
        if reply.is_empty() {
            return Err(ChannelError::Protocol("shadingNode returned no name".to_string()));
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;
    use std::io::Cursor;

    /// Stream answering from a canned buffer and recording what was written
    struct FakePort {
        replies: Cursor<Vec<u8>>,
        sent: Vec<u8>,
    }

    impl FakePort {
        fn new(replies: &[&str]) -> Self {
            let mut buffer = Vec::new();
            for reply in replies {
                buffer.extend_from_slice(reply.as_bytes());
                buffer.push(0);
            }
            Self {
                replies: Cursor::new(buffer),
                sent: Vec::new(),
            }
        }
    }

    impl Read for FakePort {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.replies.read(buf)
        }
    }

    impl Write for FakePort {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.sent.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn sent(channel: &CommandPortChannel<FakePort>) -> String {
        String::from_utf8_lossy(&channel.stream.get_ref().sent).into_owned()
    }

    #[test]
    fn test_call_sends_mel_and_decodes() {
        let mut channel = CommandPortChannel::new(FakePort::new(&["8\n", "Color"]));
        assert_eq!(channel.call("shader1", &Command::NodeCount).unwrap(), Value::Int(8));
        assert_eq!(
            channel
                .call("shader1", &Command::NodeClassName(NodeId(6)))
                .unwrap(),
            Value::from("Color")
        );
        assert_eq!(
            sent(&channel),
            "shaderfx -sfxnode \"shader1\" -getNodeCount;\nshaderfx -sfxnode \"shader1\" -getNodeClassName 6;\n"
        );
    }

    #[test]
    fn test_error_reply_is_rejection() {
        let mut channel = CommandPortChannel::new(FakePort::new(&["// Error: invalid node id //"]));
        let err = channel
            .call("shader1", &Command::IsGroupStart(NodeId(2)))
            .unwrap_err();
        match err {
            ChannelError::Rejected { command, message } => {
                assert_eq!(command, "isGroupStart");
                assert_eq!(message, "Error: invalid node id");
            }
            other => panic!("expected a rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_error_prefixed_value_is_not_rejection() {
        let mut channel = CommandPortChannel::new(FakePort::new(&["ErrorMask\n", "Error: unframed"]));
        assert_eq!(
            channel
                .call("shader1", &Command::NodeClassName(NodeId(3)))
                .unwrap(),
            Value::from("ErrorMask")
        );
        assert_eq!(
            channel
                .call("shader1", &Command::NodeClassName(NodeId(4)))
                .unwrap(),
            Value::from("Error: unframed")
        );
    }

    #[test]
    fn test_closed_port_is_protocol_error() {
        let mut channel = CommandPortChannel::new(FakePort::new(&[]));
        assert!(matches!(
            channel.call("shader1", &Command::RootNode),
            Err(ChannelError::Protocol(_))
        ));
    }

    #[test]
    fn test_create_shader_returns_host_name() {
        let mut channel = CommandPortChannel::new(FakePort::new(&["example1\n"]));
        assert_eq!(
            channel.create_shader("example", Flavor::ShaderFx).unwrap(),
            "example1"
        );
        assert!(sent(&channel).ends_with("ShaderfxShader;\n"));
    }
}
