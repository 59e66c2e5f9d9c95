// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in node types for Stingray PBS networks.
//!
//! None of these ids work in a vanilla ShaderFX network.

#![allow(missing_docs)]

use super::{Flavor, TypeDescriptor};

const F: Flavor = Flavor::StingrayPbs;

pub const VEGETATION_BENDING: TypeDescriptor = TypeDescriptor::plain("Vegetation Bending", 20241, F);
pub const CONSTANT_SCALAR: TypeDescriptor = TypeDescriptor::plain("Constant Scalar", 20196, F);
pub const CONSTANT_VECTOR2: TypeDescriptor = TypeDescriptor::plain("Constant Vector2", 20200, F);
pub const CONSTANT_VECTOR3: TypeDescriptor = TypeDescriptor::plain("Constant Vector3", 20190, F);
pub const CONSTANT_VECTOR4: TypeDescriptor = TypeDescriptor::plain("Constant Vector4", 20201, F);
pub const CONSTRUCT_VECTOR2: TypeDescriptor = TypeDescriptor::plain("Construct Vector2", 20202, F);
pub const CONSTRUCT_VECTOR3: TypeDescriptor = TypeDescriptor::plain("Construct Vector3", 20203, F);
pub const CONSTRUCT_VECTOR4: TypeDescriptor = TypeDescriptor::plain("Construct Vector4", 20204, F);
pub const EYE_VECTOR: TypeDescriptor = TypeDescriptor::plain("Eye Vector", 20214, F);
pub const MATERIAL_VARIABLE: TypeDescriptor = TypeDescriptor::plain("Material Variable", 20185, F);
pub const SUN_DIRECTION: TypeDescriptor = TypeDescriptor::plain("Sun Direction", 20238, F);
pub const TIME: TypeDescriptor = TypeDescriptor::plain("Time", 20207, F);
pub const ABSOLUTE: TypeDescriptor = TypeDescriptor::plain("Absolute", 20197, F);
pub const ADD: TypeDescriptor = TypeDescriptor::plain("Add", 20187, F);
pub const CEIL: TypeDescriptor = TypeDescriptor::plain("Ceil", 20199, F);
pub const CLAMP: TypeDescriptor = TypeDescriptor::plain("Clamp", 20193, F);
pub const COSINE: TypeDescriptor = TypeDescriptor::plain("Cosine", 20205, F);
pub const CROSS_PRODUCT: TypeDescriptor = TypeDescriptor::plain("Cross Product", 20206, F);
pub const DDX: TypeDescriptor = TypeDescriptor::plain("DDX", 20208, F);
pub const DDY: TypeDescriptor = TypeDescriptor::plain("DDY", 20209, F);
pub const DISTANCE: TypeDescriptor = TypeDescriptor::plain("Distance", 20211, F);
pub const DIVIDE: TypeDescriptor = TypeDescriptor::plain("Divide", 20212, F);
pub const DOT_PRODUCT: TypeDescriptor = TypeDescriptor::plain("Dot Product", 20213, F);
pub const FLOOR: TypeDescriptor = TypeDescriptor::plain("Floor", 20216, F);
pub const FMOD: TypeDescriptor = TypeDescriptor::plain("Fmod", 20217, F);
pub const FRACTIONAL: TypeDescriptor = TypeDescriptor::plain("Fractional", 20188, F);
pub const IF: TypeDescriptor = TypeDescriptor::plain("If", 20189, F);
pub const INTERPOLATE_SMOOTH: TypeDescriptor = TypeDescriptor::plain("Interpolate Smooth", 20230, F);
pub const INVERT: TypeDescriptor = TypeDescriptor::plain("Invert", 20220, F);
pub const LENGTH: TypeDescriptor = TypeDescriptor::plain("Length", 20221, F);
pub const LINEAR_INTERPOLATE: TypeDescriptor = TypeDescriptor::plain("Linear Interpolate", 20184, F);
pub const MAX: TypeDescriptor = TypeDescriptor::plain("Max", 20240, F);
pub const MULTIPLY: TypeDescriptor = TypeDescriptor::plain("Multiply", 20186, F);
pub const NORMALIZE: TypeDescriptor = TypeDescriptor::plain("Normalize", 20222, F);
pub const POWER: TypeDescriptor = TypeDescriptor::plain("Power", 20192, F);
pub const REFLECT: TypeDescriptor = TypeDescriptor::plain("Reflect", 20226, F);
pub const REFRACT: TypeDescriptor = TypeDescriptor::plain("Refract", 20227, F);
pub const SINE: TypeDescriptor = TypeDescriptor::plain("Sine", 20229, F);
pub const SQUARE_ROOT: TypeDescriptor = TypeDescriptor::plain("Square Root", 20231, F);
pub const SUBTRACT: TypeDescriptor = TypeDescriptor::plain("Subtract", 20182, F);
pub const STANDARD_BASE: TypeDescriptor = TypeDescriptor::plain("Standard Base", 20176, F);
pub const UNLIT_BASE: TypeDescriptor = TypeDescriptor::plain("Unlit Base", 20242, F);
pub const SAMPLE_CUBE: TypeDescriptor = TypeDescriptor::plain("Sample Cube", 20237, F);
pub const SAMPLE_TEXTURE: TypeDescriptor = TypeDescriptor::plain("Sample Texture", 20177, F);
pub const OBJECT_TO_WORLD: TypeDescriptor = TypeDescriptor::plain("Object To World", 20223, F);
pub const TANGENT_TO_WORLD: TypeDescriptor = TypeDescriptor::plain("Tangent To World", 20195, F);
pub const WORLD_TO_OBJECT: TypeDescriptor = TypeDescriptor::plain("World To Object", 20236, F);
pub const WORLD_TO_TANGENT: TypeDescriptor = TypeDescriptor::plain("World To Tangent", 20232, F);
pub const BLEND_NORMALS: TypeDescriptor = TypeDescriptor::plain("Blend Normals", 20198, F);
pub const DESATURATION: TypeDescriptor = TypeDescriptor::plain("Desaturation", 20210, F);
pub const FLIPBOOK: TypeDescriptor = TypeDescriptor::plain("Flipbook", 20215, F);
pub const FRESNEL: TypeDescriptor = TypeDescriptor::plain("Fresnel", 20218, F);
pub const HSV_TO_RGB: TypeDescriptor = TypeDescriptor::plain("HSV to RGB", 20219, F);
pub const PANNER: TypeDescriptor = TypeDescriptor::plain("Panner", 20224, F);
pub const PARALLAX: TypeDescriptor = TypeDescriptor::plain("Parallax", 20183, F);
pub const RGB_TO_HSV: TypeDescriptor = TypeDescriptor::plain("RGB to HSV", 20228, F);
pub const ROTATOR: TypeDescriptor = TypeDescriptor::plain("Rotator", 20225, F);
pub const TEXCOORD_0: TypeDescriptor = TypeDescriptor::plain("Texcoord 0", 20178, F);
pub const TEXCOORD_1: TypeDescriptor = TypeDescriptor::plain("Texcoord 1", 20179, F);
pub const TEXCOORD_2: TypeDescriptor = TypeDescriptor::plain("Texcoord 2", 20180, F);
pub const TEXCOORD_3: TypeDescriptor = TypeDescriptor::plain("Texcoord 3", 20181, F);
pub const VERTEX_BINORMAL: TypeDescriptor = TypeDescriptor::plain("Vertex Binormal", 20235, F);
pub const VERTEX_COLOR_0: TypeDescriptor = TypeDescriptor::plain("Vertex Color 0", 20191, F);
pub const VERTEX_POSITION: TypeDescriptor = TypeDescriptor::plain("Vertex Position", 20233, F);
pub const VERTEX_TANGENT: TypeDescriptor = TypeDescriptor::plain("Vertex Tangent", 20234, F);
pub const WORLD_NORMAL: TypeDescriptor = TypeDescriptor::plain("World Normal", 20194, F);

/// Every built-in descriptor of this flavor
pub const ALL: &[TypeDescriptor] = &[
    VEGETATION_BENDING,
    CONSTANT_SCALAR,
    CONSTANT_VECTOR2,
    CONSTANT_VECTOR3,
    CONSTANT_VECTOR4,
    CONSTRUCT_VECTOR2,
    CONSTRUCT_VECTOR3,
    CONSTRUCT_VECTOR4,
    EYE_VECTOR,
    MATERIAL_VARIABLE,
    SUN_DIRECTION,
    TIME,
    ABSOLUTE,
    ADD,
    CEIL,
    CLAMP,
    COSINE,
    CROSS_PRODUCT,
    DDX,
    DDY,
    DISTANCE,
    DIVIDE,
    DOT_PRODUCT,
    FLOOR,
    FMOD,
    FRACTIONAL,
    IF,
    INTERPOLATE_SMOOTH,
    INVERT,
    LENGTH,
    LINEAR_INTERPOLATE,
    MAX,
    MULTIPLY,
    NORMALIZE,
    POWER,
    REFLECT,
    REFRACT,
    SINE,
    SQUARE_ROOT,
    SUBTRACT,
    STANDARD_BASE,
    UNLIT_BASE,
    SAMPLE_CUBE,
    SAMPLE_TEXTURE,
    OBJECT_TO_WORLD,
    TANGENT_TO_WORLD,
    WORLD_TO_OBJECT,
    WORLD_TO_TANGENT,
    BLEND_NORMALS,
    DESATURATION,
    FLIPBOOK,
    FRESNEL,
    HSV_TO_RGB,
    PANNER,
    PARALLAX,
    RGB_TO_HSV,
    ROTATOR,
    TEXCOORD_0,
    TEXCOORD_1,
    TEXCOORD_2,
    TEXCOORD_3,
    VERTEX_BINORMAL,
    VERTEX_COLOR_0,
    VERTEX_POSITION,
    VERTEX_TANGENT,
    WORLD_NORMAL,
];
