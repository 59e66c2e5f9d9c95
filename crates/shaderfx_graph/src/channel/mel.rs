// SPDX-License-Identifier: MIT OR Apache-2.0
//! MEL rendering of commands and decoding of text replies.
//!
//! A text transport sends each [`Command`] as one `shaderfx` statement and
//! gets back the MEL result as text: scalars as-is, arrays tab-separated.

use super::Command;
use crate::catalog::Flavor;
use crate::error::ChannelError;
use crate::node::NodeId;
use crate::value::Value;
use std::fmt::Write;

/// Quote `text` as a MEL string literal
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn render_value(out: &mut String, value: &Value) {
    match value {
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => {
            let _ = write!(out, "{i}");
        }
        Value::Float(f) => {
            let _ = write!(out, "{f:?}");
        }
        Value::Text(s) => out.push_str(&quote(s)),
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                render_value(out, item);
            }
        }
    }
}

/// Flag name and positional arguments of a command
fn arguments(command: &Command) -> (String, Vec<Value>) {
    let id = |node: &NodeId| Value::from(i64::from(node.0));
    let slot = |slot: usize| Value::from(slot);
    let flag = command.flag().to_string();
    let args = match command {
        Command::NodeCount | Command::RootNode | Command::InitShaderAttributes => Vec::new(),
        Command::IsGroupStart(node)
        | Command::ListProperties(node)
        | Command::NodeClassName(node)
        | Command::DeleteNode(node)
        | Command::GroupEnd(node) => vec![id(node)],
        Command::PropertyType { node, name } | Command::PropertyValue { node, name, .. } => {
            vec![id(node), Value::from(name.as_str())]
        }
        Command::EditProperty {
            node,
            name,
            type_tag,
            args,
        } => {
            let mut all = vec![id(node), Value::from(name.as_str())];
            all.extend(args.iter().cloned());
            return (format!("edit_{type_tag}"), all);
        }
        Command::SocketCount { node, direction } => vec![id(node), Value::Int(direction.code())],
        Command::SocketName {
            node,
            direction,
            slot: s,
        }
        | Command::ConnectedSocketCount {
            node,
            direction,
            slot: s,
        } => vec![id(node), Value::Int(direction.code()), slot(*s)],
        Command::ConnectedNodeId {
            node,
            direction,
            slot: s,
            index,
        } => vec![
            id(node),
            Value::Int(direction.code()),
            slot(*s),
            slot(*index),
            Value::Int(1),
        ],
        Command::AddNode(type_id) => vec![Value::from(*type_id)],
        Command::AddGroup(identifier) => vec![Value::from(identifier.as_str())],
        Command::MakeConnection { from, to } | Command::BreakConnection { from, to } => vec![
            id(&from.node),
            slot(from.slot),
            id(&to.node),
            slot(to.slot),
        ],
        Command::LoadGraph(path) => vec![Value::from(path.to_string_lossy().into_owned())],
        Command::NodeTypeByClassName(name) => vec![Value::from(name.as_str())],
    };
    (flag, args)
}

/// Render `command` against `graph` as one MEL statement
pub fn render(graph: &str, command: &Command) -> String {
    let (flag, args) = arguments(command);
    let mut out = format!("shaderfx -sfxnode {} -{flag}", quote(graph));
    for arg in &args {
        out.push(' ');
        render_value(&mut out, arg);
    }
    out.push(';');
    out
}

/// Render the statement creating a shader object of `flavor`
pub fn render_create_shader(name: &str, flavor: Flavor) -> String {
    format!(
        "shadingNode -asShader -name {} {};",
        quote(name),
        flavor.shading_node_type()
    )
}

/// Strip the reply terminator and trailing line breaks
pub fn trim_reply(raw: &str) -> &str {
    raw.trim_end_matches(['\0', '\n', '\r'])
}

fn protocol(command: &Command, raw: &str) -> ChannelError {
    ChannelError::Protocol(format!("Cannot decode reply to {}: {raw:?}", command.flag()))
}

fn parse_int(command: &Command, raw: &str) -> Result<Value, ChannelError> {
    raw.trim()
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|_| protocol(command, raw))
}

fn parse_bool(command: &Command, raw: &str) -> Result<Value, ChannelError> {
    match raw.trim() {
        "1" | "true" => Ok(Value::Bool(true)),
        "0" | "false" => Ok(Value::Bool(false)),
        _ => Err(protocol(command, raw)),
    }
}

fn parse_float(command: &Command, raw: &str) -> Result<Value, ChannelError> {
    raw.trim()
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| protocol(command, raw))
}

fn split(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(['\t', ' ']).filter(|s| !s.is_empty())
}

/// Decode the text reply to a property value query by its type tag
fn decode_property(command: &Command, type_tag: &str, raw: &str) -> Result<Value, ChannelError> {
    match type_tag {
        "float" => parse_float(command, raw),
        "int" => parse_int(command, raw),
        "bool" => parse_bool(command, raw),
        "float2" | "float3" | "float4" => split(raw)
            .map(|item| parse_float(command, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        "stringlist" => Ok(parse_int(command, raw).unwrap_or_else(|_| Value::Text(raw.to_string()))),
        _ => Ok(Value::Text(raw.to_string())),
    }
}

/// Decode a raw text reply according to what `command` returns
pub fn decode_reply(command: &Command, raw: &str) -> Result<Value, ChannelError> {
    let raw = trim_reply(raw);
    match command {
        Command::NodeCount
        | Command::SocketCount { .. }
        | Command::ConnectedNodeId { .. }
        | Command::ConnectedSocketCount { .. }
        | Command::AddNode(_)
        | Command::AddGroup(_)
        | Command::RootNode
        | Command::GroupEnd(_)
        | Command::NodeTypeByClassName(_) => parse_int(command, raw),
        Command::IsGroupStart(_) => parse_bool(command, raw),
        Command::ListProperties(_) => Ok(Value::List(
            raw.split('\t')
                .filter(|s| !s.is_empty())
                .map(|s| Value::Text(s.to_string()))
                .collect(),
        )),
        Command::PropertyType { .. } | Command::NodeClassName(_) | Command::SocketName { .. } => {
            Ok(Value::Text(raw.to_string()))
        }
        Command::PropertyValue { type_tag, .. } => decode_property(command, type_tag, raw),
        Command::EditProperty { .. }
        | Command::DeleteNode(_)
        | Command::MakeConnection { .. }
        | Command::BreakConnection { .. }
        | Command::InitShaderAttributes
        | Command::LoadGraph(_) => Ok(Value::none()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plug::{Direction, Plug};

    #[test]
    fn test_render_query() {
        let command = Command::ConnectedNodeId {
            node: NodeId(11),
            direction: Direction::Input,
            slot: 1,
            index: 0,
        };
        assert_eq!(
            render("shader1", &command),
            r#"shaderfx -sfxnode "shader1" -getConnectedNodeID 11 0 1 0 1;"#
        );
        assert_eq!(render("shader1", &Command::RootNode), r#"shaderfx -sfxnode "shader1" -rhw;"#);
    }

    #[test]
    fn test_render_edit_spreads_arguments() {
        let command = Command::EditProperty {
            node: NodeId(6),
            name: "color".to_string(),
            type_tag: "float4".to_string(),
            args: Value::from([1.0, 0.0, 1.0, 0.0]).spread(),
        };
        assert_eq!(
            render("s", &command),
            r#"shaderfx -sfxnode "s" -edit_float4 6 "color" 1.0 0.0 1.0 0.0;"#
        );
    }

    #[test]
    fn test_render_connection_and_group() {
        let command = Command::MakeConnection {
            from: Plug::new(NodeId(6), 1),
            to: Plug::new(NodeId(11), 0),
        };
        assert_eq!(render("s", &command), r#"shaderfx -sfxnode "s" -makeConnection 6 1 11 0;"#);

        let command = Command::AddGroup("Texture Map-Hw Shader Nodes-Textures.grp".to_string());
        assert_eq!(
            render("s", &command),
            r#"shaderfx -sfxnode "s" -addGroup "Texture Map-Hw Shader Nodes-Textures.grp";"#
        );
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote(r#"a "b" \c"#), r#""a \"b\" \\c""#);
        assert_eq!(
            render_create_shader("my\"shader", Flavor::StingrayPbs),
            r#"shadingNode -asShader -name "my\"shader" StingrayPBS;"#
        );
    }

    #[test]
    fn test_decode_replies() {
        assert_eq!(decode_reply(&Command::NodeCount, "8\n\0").unwrap(), Value::Int(8));
        assert_eq!(
            decode_reply(&Command::IsGroupStart(NodeId(14)), "1").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            decode_reply(&Command::ListProperties(NodeId(1)), "name\tposx\tposy").unwrap(),
            Value::from(vec!["name", "posx", "posy"])
        );
        assert_eq!(
            decode_reply(&Command::ListProperties(NodeId(1)), "").unwrap(),
            Value::List(Vec::new())
        );
        assert!(matches!(
            decode_reply(&Command::RootNode, "oops"),
            Err(ChannelError::Protocol(_))
        ));
    }

    #[test]
    fn test_decode_property_by_type_tag() {
        let query = |type_tag: &str| Command::PropertyValue {
            node: NodeId(6),
            name: "x".to_string(),
            type_tag: type_tag.to_string(),
        };
        assert_eq!(
            decode_reply(&query("float4"), "0.5\t0.5\t0.5\t1").unwrap(),
            Value::from([0.5, 0.5, 0.5, 1.0])
        );
        assert_eq!(decode_reply(&query("bool"), "0").unwrap(), Value::Bool(false));
        assert_eq!(decode_reply(&query("float"), "-150").unwrap(), Value::Float(-150.0));
        assert_eq!(decode_reply(&query("string"), "Color").unwrap(), Value::from("Color"));
    }
}
