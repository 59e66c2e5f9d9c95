// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in node types for vanilla ShaderFX networks.
//!
//! Group types are created through a composite group identifier rather than
//! their numeric id; see [`TypeDescriptor::create_target`]. None of these ids
//! work in a Stingray PBS network.

#![allow(missing_docs)]

use super::{Flavor, TypeDescriptor};

const F: Flavor = Flavor::ShaderFx;

pub const COMPARISON: TypeDescriptor = TypeDescriptor::plain("Comparison", 20162, F);
pub const IF_ELSE_BASIC: TypeDescriptor = TypeDescriptor::plain("If Else Basic", 20163, F);
pub const TIME: TypeDescriptor = TypeDescriptor::plain("Time", 20086, F);
pub const LIGHT: TypeDescriptor = TypeDescriptor::plain("Light", 20152, F);
pub const LIGHT_LIST: TypeDescriptor = TypeDescriptor::plain("Light List", 20153, F);
pub const ADD: TypeDescriptor = TypeDescriptor::plain("Add", 20026, F);
pub const CLAMP: TypeDescriptor = TypeDescriptor::plain("Clamp", 20044, F);
pub const CROSS_PRODUCT: TypeDescriptor = TypeDescriptor::plain("Cross Product", 20030, F);
pub const DISTANCE: TypeDescriptor = TypeDescriptor::plain("Distance", 20048, F);
pub const DIVIDE: TypeDescriptor = TypeDescriptor::plain("Divide", 20027, F);
pub const DOT_PRODUCT: TypeDescriptor = TypeDescriptor::plain("Dot Product", 20018, F);
pub const INVERT: TypeDescriptor = TypeDescriptor::plain("Invert", 20157, F);
pub const LENGTH: TypeDescriptor = TypeDescriptor::plain("Length", 20032, F);
pub const MAX: TypeDescriptor = TypeDescriptor::plain("Max", 20052, F);
pub const MULTIPLY: TypeDescriptor = TypeDescriptor::plain("Multiply", 20016, F);
pub const NORMALIZE: TypeDescriptor = TypeDescriptor::plain("Normalize", 20021, F);
pub const SUBTRACT: TypeDescriptor = TypeDescriptor::plain("Subtract", 20022, F);
pub const VIEW: TypeDescriptor = TypeDescriptor::plain("View", 20065, F);
pub const VIEW_I: TypeDescriptor = TypeDescriptor::plain("View I", 20067, F);
pub const VIEW_PRJ: TypeDescriptor = TypeDescriptor::plain("View Prj", 20077, F);
pub const WORLD: TypeDescriptor = TypeDescriptor::plain("World", 20061, F);
pub const WORLD_I: TypeDescriptor = TypeDescriptor::plain("World I", 20063, F);
pub const WORLD_IT: TypeDescriptor = TypeDescriptor::plain("World IT", 20064, F);
pub const BOOL: TypeDescriptor = TypeDescriptor::plain("Bool", 20088, F);
pub const COLOR: TypeDescriptor = TypeDescriptor::plain("Color", 20011, F);
pub const FLOAT: TypeDescriptor = TypeDescriptor::plain("Float", 20017, F);
pub const FLOAT2: TypeDescriptor = TypeDescriptor::plain("Float2", 20139, F);
pub const INT: TypeDescriptor = TypeDescriptor::plain("Int", 20096, F);
pub const VECTOR_COMPONENT: TypeDescriptor = TypeDescriptor::plain("Vector Component", 20108, F);
pub const VECTOR_CONSTRUCT: TypeDescriptor = TypeDescriptor::plain("Vector Construct", 20020, F);
pub const STRING: TypeDescriptor = TypeDescriptor::plain("String", 20105, F);
pub const NOISE: TypeDescriptor = TypeDescriptor::plain("Noise", 20054, F);
pub const BRICK: TypeDescriptor = TypeDescriptor::group("Brick", 40008, "Patterns", F);
pub const CELLULAR_NOISE: TypeDescriptor = TypeDescriptor::group("Cellular Noise", 40013, "Patterns", F);
pub const CHECKER_2D: TypeDescriptor = TypeDescriptor::group("Checker 2D", 40014, "Patterns", F);
pub const SIMPLEX_NOISE_2D: TypeDescriptor = TypeDescriptor::group("Simplex Noise 2D", 40063, "Patterns", F);
pub const SIMPLEX_NOISE_3D: TypeDescriptor = TypeDescriptor::group("Simplex Noise 3D", 40064, "Patterns", F);
pub const VORONOI_SMOOTH_QUILEZ: TypeDescriptor = TypeDescriptor::group("VoronoiSmoothQuilez", 40086, "Patterns", F);
pub const WAVY_LINES: TypeDescriptor = TypeDescriptor::group("WavyLines", 40088, "Patterns", F);
pub const COMBINE_NORMAL_MAPS: TypeDescriptor = TypeDescriptor::group("Combine Normal Maps", 40017, "Textures", F);
pub const DERIVED_NORMAL_Z_MAP: TypeDescriptor = TypeDescriptor::group("Derived Normal Z Map", 40018, "Textures", F);
pub const FLIP_BOOK: TypeDescriptor = TypeDescriptor::group("Flip Book", 40022, "Textures", F);
pub const LAT_LONG_UVS: TypeDescriptor = TypeDescriptor::group("LatLong UVs", 40035, "Textures", F);
pub const MAT_CAP_UVS: TypeDescriptor = TypeDescriptor::group("MatCapUVs", 40043, "Textures", F);
pub const PNAEN_DISPLACEMENT_MAP: TypeDescriptor = TypeDescriptor::group("PNAEN Displacement Map", 40051, "Textures", F);
pub const REFLECTION_CUBE_MAP: TypeDescriptor = TypeDescriptor::group("Reflection Cube Map", 40054, "Textures", F);
pub const REFRACTION_CUBE_MAP: TypeDescriptor = TypeDescriptor::group("Refraction Cube Map", 40056, "Textures", F);
pub const SPHERICAL_REFLECTION_UVS: TypeDescriptor = TypeDescriptor::group("Spherical Reflection UVs", 40066, "Textures", F);
pub const TEXTURE_MAP: TypeDescriptor = TypeDescriptor::group("Texture Map", 40071, "Textures", F);
pub const UV_PANNER: TypeDescriptor = TypeDescriptor::group("UV Panner", 40074, "Textures", F);
pub const UV_ROTATOR: TypeDescriptor = TypeDescriptor::group("UV Rotator", 40075, "Textures", F);
pub const CAMERA_VECTOR: TypeDescriptor = TypeDescriptor::group("Camera Vector", 40012, "Inputs Common", F);
pub const LIGHT_VECTOR: TypeDescriptor = TypeDescriptor::group("Light Vector", 40040, "Inputs Common", F);
pub const REFLECTION_VECTOR: TypeDescriptor = TypeDescriptor::group("Reflection Vector", 40055, "Inputs Common", F);
pub const REFRACTION_VECTOR: TypeDescriptor = TypeDescriptor::group("Refraction Vector", 40057, "Inputs Common", F);
pub const UV_SET: TypeDescriptor = TypeDescriptor::group("UV Set", 40076, "Inputs Common", F);
pub const VERTEX_COLOR: TypeDescriptor = TypeDescriptor::group("Vertex Color", 40078, "Inputs Common", F);
pub const VERTEX_WORLD_BINORMAL: TypeDescriptor = TypeDescriptor::group("Vertex World BiNormal", 40082, "Inputs Common", F);
pub const VERTEX_WORLD_POSITION: TypeDescriptor = TypeDescriptor::group("Vertex World Position", 40084, "Inputs Common", F);
pub const VERTEX_WORLD_TANGENT: TypeDescriptor = TypeDescriptor::group("Vertex World Tangent", 40085, "Inputs Common", F);
pub const AMBIENT_GROUND_SKY: TypeDescriptor = TypeDescriptor::group("Ambient Ground Sky", 40001, "Lighting", F);
pub const DESATURATE_COLOR: TypeDescriptor = TypeDescriptor::group("Desaturate Color", 40019, "Lighting", F);
pub const FRESNEL: TypeDescriptor = TypeDescriptor::group("Fresnel", 40024, "Lighting", F);
pub const BUMP: TypeDescriptor = TypeDescriptor::group("Bump", 40009, "Various", F);
pub const CAMERA_DISTANCE_TESSELLATION: TypeDescriptor = TypeDescriptor::group("Camera Distance Tessellation", 40010, "Various", F);

/// Every built-in descriptor of this flavor
pub const ALL: &[TypeDescriptor] = &[
    COMPARISON,
    IF_ELSE_BASIC,
    TIME,
    LIGHT,
    LIGHT_LIST,
    ADD,
    CLAMP,
    CROSS_PRODUCT,
    DISTANCE,
    DIVIDE,
    DOT_PRODUCT,
    INVERT,
    LENGTH,
    MAX,
    MULTIPLY,
    NORMALIZE,
    SUBTRACT,
    VIEW,
    VIEW_I,
    VIEW_PRJ,
    WORLD,
    WORLD_I,
    WORLD_IT,
    BOOL,
    COLOR,
    FLOAT,
    FLOAT2,
    INT,
    VECTOR_COMPONENT,
    VECTOR_CONSTRUCT,
    STRING,
    NOISE,
    BRICK,
    CELLULAR_NOISE,
    CHECKER_2D,
    SIMPLEX_NOISE_2D,
    SIMPLEX_NOISE_3D,
    VORONOI_SMOOTH_QUILEZ,
    WAVY_LINES,
    COMBINE_NORMAL_MAPS,
    DERIVED_NORMAL_Z_MAP,
    FLIP_BOOK,
    LAT_LONG_UVS,
    MAT_CAP_UVS,
    PNAEN_DISPLACEMENT_MAP,
    REFLECTION_CUBE_MAP,
    REFRACTION_CUBE_MAP,
    SPHERICAL_REFLECTION_UVS,
    TEXTURE_MAP,
    UV_PANNER,
    UV_ROTATOR,
    CAMERA_VECTOR,
    LIGHT_VECTOR,
    REFLECTION_VECTOR,
    REFRACTION_VECTOR,
    UV_SET,
    VERTEX_COLOR,
    VERTEX_WORLD_BINORMAL,
    VERTEX_WORLD_POSITION,
    VERTEX_WORLD_TANGENT,
    AMBIENT_GROUND_SKY,
    DESATURATE_COLOR,
    FRESNEL,
    BUMP,
    CAMERA_DISTANCE_TESSELLATION,
];
