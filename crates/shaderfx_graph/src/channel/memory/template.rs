// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node classes and default graphs of the simulated host.

use super::{HostConnection, HostGraph, HostNode, HostProperty};
use crate::catalog::Flavor;
use crate::value::Value;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Class name the host gives the end node of every group
pub const GROUP_END_CLASS: &str = "Group End";

/// Properties every host node carries
fn common_properties(name: &str) -> IndexMap<String, HostProperty> {
    let text = |s: &str| Value::Text(s.to_string());
    [
        ("uigroup", "string", text("")),
        ("socketdefaultvalue", "string", text("")),
        ("semantic", "string", text("")),
        ("global", "bool", Value::Bool(false)),
        ("activesocketlabel", "string", text("")),
        ("compoundassignment", "bool", Value::Bool(false)),
        ("exposetoui", "bool", Value::Bool(false)),
        ("defineinheader", "bool", Value::Bool(false)),
        ("group", "int", Value::Int(0)),
        ("uiorder", "int", Value::Int(0)),
        ("note", "string", text("")),
        ("width", "int", Value::Int(120)),
        ("version", "float", Value::Float(1.0)),
        ("hasbeenedited", "bool", Value::Bool(false)),
        ("collapsed", "bool", Value::Bool(false)),
        ("helpaction", "action", text("")),
        ("posx", "float", Value::Float(0.0)),
        ("posy", "float", Value::Float(0.0)),
        ("previewswatch", "int", Value::Int(0)),
        ("name", "string", text(name)),
        ("activesocket", "int", Value::Int(0)),
        ("socketswizzlevalue", "string", text("")),
    ]
    .into_iter()
    .map(|(key, tag, value)| (key.to_string(), HostProperty::new(tag, value)))
    .collect()
}

fn sockets(class_name: &str) -> (&'static [&'static str], &'static [&'static str]) {
    match class_name {
        "Hardware Shader" => (
            &["Color", "Specular Color", "Normal", "Emissive", "Opacity", " Mask Cutoff"],
            &[],
        ),
        "Standard Base" => (
            &["Base Color", "Normal", "Metallic", "Roughness", "Emissive", "Opacity", "Ambient Occlusion"],
            &[],
        ),
        "Unlit Base" => (&["Base Color", "Opacity"], &[]),
        "Color" => (&[], &["RGBA", "RGB", "R", "G", "B", "A"]),
        "Vector Construct" => (&["XYZ", "W"], &["Result"]),
        "Add" | "Subtract" | "Multiply" | "Divide" | "Max" | "Dot Product" | "Cross Product"
        | "Distance" | "Power" | "Fmod" => (&["A", "B"], &["Result"]),
        "Sample Texture" => (&["UV", "Mip Level"], &["RGBA", "RGB", "R", "G", "B", "A"]),
        "Texcoord 0" | "Texcoord 1" | "Texcoord 2" | "Texcoord 3" => (&[], &["UV"]),
        "Float" | "Float2" | "Int" | "Bool" | "String" | "Time" | "Constant Scalar"
        | "Constant Vector2" | "Constant Vector3" | "Constant Vector4" | "Material Variable" => {
            (&[], &["Result"])
        }
        _ => (&["Input"], &["Result"]),
    }
}

fn group_sockets(type_name: &str) -> (&'static [&'static str], &'static [&'static str]) {
    match type_name {
        "Texture Map" => (&["UV", "Mip Level"], &["RGBA", "RGB", "R", "G", "B", "A"]),
        "Fresnel" => (&["Normal", "Exponent"], &["Result"]),
        "Camera Vector" | "Light Vector" | "Reflection Vector" | "Refraction Vector" => {
            (&[], &["XYZ", "X", "Y", "Z"])
        }
        _ => (&["Input"], &["Result"]),
    }
}

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}

/// A freshly created node of `class_name`
pub fn node_for_class(class_name: &str) -> HostNode {
    let (inputs, outputs) = sockets(class_name);
    let mut properties = common_properties(&class_name.replace(' ', ""));

    match class_name {
        "Color" => {
            properties.insert(
                "color".to_string(),
                HostProperty::new("float4", Value::from([0.5, 0.5, 0.5, 1.0])),
            );
        }
        "Float" | "Constant Scalar" => {
            properties.insert("value".to_string(), HostProperty::new("float", Value::Float(0.0)));
        }
        "Material Variable" => {
            properties.insert(
                "defaultscalar".to_string(),
                HostProperty::new("float", Value::Float(0.0)),
            );
            properties.insert(
                "defaultvectwo".to_string(),
                HostProperty::unreported("float2", Value::from([0.0, 0.0])),
            );
            properties.insert(
                "defaultvectthree".to_string(),
                HostProperty::unreported("float3", Value::from([0.0, 0.0, 0.0])),
            );
            properties.insert(
                "defaultvecfour".to_string(),
                HostProperty::new("float4", Value::from([0.0, 0.0, 0.0, 0.0])),
            );
        }
        _ => {}
    }

    HostNode {
        class_name: class_name.to_string(),
        group_start: false,
        group_end: None,
        properties,
        inputs: labels(inputs),
        outputs: labels(outputs),
        swizzles: BTreeMap::new(),
    }
}

/// Start and end node of a freshly created group.
///
/// The start node reports a single placeholder output; the outputs the group
/// actually shows are on the end node.
pub fn group_for_type(type_name: &str) -> (HostNode, HostNode) {
    let (inputs, outputs) = group_sockets(type_name);

    let mut start = node_for_class(type_name);
    start.group_start = true;
    start.inputs = labels(inputs);
    start.outputs = vec!["Output".to_string()];

    let mut end = node_for_class(GROUP_END_CLASS);
    end.inputs = vec!["Output".to_string()];
    end.outputs = labels(outputs);

    (start, end)
}

fn named(class_name: &str, name: &str) -> HostNode {
    let mut node = node_for_class(class_name);
    if let Some(property) = node.properties.get_mut("name") {
        property.value = Value::Text(name.to_string());
    }
    node
}

fn wire(from: (u32, usize), to: (u32, usize)) -> HostConnection {
    HostConnection { from, to }
}

/// The graph a new shader object of `flavor` starts with
pub fn default_graph(flavor: Flavor) -> HostGraph {
    let mut graph = HostGraph::new(flavor);
    match flavor {
        Flavor::ShaderFx => {
            graph.nodes.insert(1, named("Hardware Shader", "TraditionalGameMaterial"));
            graph.nodes.insert(3, named("Vector Construct", "TotalAmbientAndOpacity"));
            graph.nodes.insert(4, named("Float", "SurfaceMaskCutoff"));
            graph.nodes.insert(6, named("Color", "Color"));
            graph.nodes.insert(9, named("Color", "Color"));
            graph.nodes.insert(11, named("Multiply", "Lighting"));

            let (mut start, end) = group_for_type("Texture Map");
            start.group_end = Some(15);
            graph.nodes.insert(14, start);
            graph.nodes.insert(15, end);

            graph.connections = vec![
                wire((6, 1), (11, 0)),
                wire((9, 1), (11, 1)),
                wire((11, 0), (3, 0)),
                wire((3, 0), (1, 0)),
                wire((6, 1), (1, 1)),
                wire((4, 0), (1, 5)),
            ];
            graph.root = Some(1);
            graph.next_id = 16;
        }
        Flavor::StingrayPbs => {
            graph.nodes.insert(1, named("Standard Base", "StandardBase"));
            graph.nodes.insert(2, named("Material Variable", "roughness"));
            graph.nodes.insert(4, named("Texcoord 0", "uv"));
            graph.nodes.insert(5, named("Sample Texture", "color_map"));

            graph.connections = vec![
                wire((4, 0), (5, 0)),
                wire((5, 1), (1, 0)),
                wire((2, 0), (1, 3)),
            ];
            graph.root = Some(1);
            graph.next_id = 6;
        }
    }
    graph
}
