//! Scene lights.
//!
//! A [`Light`] is plain data describing an illumination source the way VTK
//! models one. Nothing here renders; the struct exists so scenes can be
//! described, serialized, and handed to a renderer later.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use gridviz_core::error::{GridvizError, Result};

/// How a light is anchored in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightType {
    /// Fixed to the camera, shining along the view direction.
    Headlight,
    /// Specified in camera space, following camera motion.
    CameraLight,
    /// Fixed in world space.
    SceneLight,
}

impl LightType {
    /// Parses a forgiving textual light type.
    ///
    /// Case and interior spaces are ignored, so `"camera light"`,
    /// `"CameraLight"` and `"cameralight"` all name the same variant.
    pub fn parse(value: &str) -> Result<Self> {
        let normalized: String = value
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "headlight" => Ok(Self::Headlight),
            "cameralight" => Ok(Self::CameraLight),
            "scenelight" => Ok(Self::SceneLight),
            _ => Err(GridvizError::InvalidLightType(value.to_string())),
        }
    }
}

impl fmt::Display for LightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Headlight => "Headlight",
            Self::CameraLight => "Camera Light",
            Self::SceneLight => "Scene Light",
        };
        write!(f, "{label}")
    }
}

/// An illumination source with VTK's light semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    position: Vec3,
    focal_point: Vec3,
    ambient_color: Vec3,
    diffuse_color: Vec3,
    specular_color: Vec3,
    intensity: f32,
    on: bool,
    positional: bool,
    exponent: f32,
    cone_angle: f32,
    attenuation_values: Vec3,
    shadow_attenuation: f32,
    light_type: LightType,
}

impl Default for Light {
    fn default() -> Self {
        Self::new()
    }
}

impl Light {
    /// Creates a white directional scene light with VTK's defaults.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            focal_point: Vec3::ZERO,
            ambient_color: Vec3::ONE,
            diffuse_color: Vec3::ONE,
            specular_color: Vec3::ONE,
            intensity: 1.0,
            on: true,
            positional: false,
            exponent: 1.0,
            cone_angle: 30.0,
            attenuation_values: Vec3::new(1.0, 0.0, 0.0),
            shadow_attenuation: 1.0,
            light_type: LightType::SceneLight,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the ambient, diffuse and specular colors to the same value.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.ambient_color = color;
        self.diffuse_color = color;
        self.specular_color = color;
        self
    }

    pub fn with_light_type(mut self, light_type: LightType) -> Self {
        self.light_type = light_type;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    pub fn set_focal_point(&mut self, focal_point: Vec3) {
        self.focal_point = focal_point;
    }

    pub fn ambient_color(&self) -> Vec3 {
        self.ambient_color
    }

    pub fn set_ambient_color(&mut self, color: Vec3) {
        self.ambient_color = color;
    }

    pub fn diffuse_color(&self) -> Vec3 {
        self.diffuse_color
    }

    pub fn set_diffuse_color(&mut self, color: Vec3) {
        self.diffuse_color = color;
    }

    pub fn specular_color(&self) -> Vec3 {
        self.specular_color
    }

    pub fn set_specular_color(&mut self, color: Vec3) {
        self.specular_color = color;
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn switch_on(&mut self) {
        self.on = true;
    }

    pub fn switch_off(&mut self) {
        self.on = false;
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    /// Whether the light radiates from its position rather than along a
    /// direction.
    pub fn is_positional(&self) -> bool {
        self.positional
    }

    pub fn set_positional(&mut self, positional: bool) {
        self.positional = positional;
    }

    /// Spotlight falloff exponent, only meaningful for positional lights.
    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    pub fn set_exponent(&mut self, exponent: f32) {
        self.exponent = exponent;
    }

    pub fn cone_angle(&self) -> f32 {
        self.cone_angle
    }

    pub fn set_cone_angle(&mut self, cone_angle: f32) {
        self.cone_angle = cone_angle;
    }

    /// Constant, linear and quadratic attenuation coefficients.
    pub fn attenuation_values(&self) -> Vec3 {
        self.attenuation_values
    }

    pub fn set_attenuation_values(&mut self, values: Vec3) {
        self.attenuation_values = values;
    }

    pub fn shadow_attenuation(&self) -> f32 {
        self.shadow_attenuation
    }

    pub fn set_shadow_attenuation(&mut self, attenuation: f32) {
        self.shadow_attenuation = attenuation;
    }

    pub fn light_type(&self) -> LightType {
        self.light_type
    }

    pub fn set_light_type(&mut self, light_type: LightType) {
        self.light_type = light_type;
    }

    pub fn is_headlight(&self) -> bool {
        self.light_type == LightType::Headlight
    }

    pub fn is_camera_light(&self) -> bool {
        self.light_type == LightType::CameraLight
    }

    pub fn is_scene_light(&self) -> bool {
        self.light_type == LightType::SceneLight
    }

    pub fn set_headlight(&mut self) {
        self.light_type = LightType::Headlight;
    }

    pub fn set_camera_light(&mut self) {
        self.light_type = LightType::CameraLight;
    }

    pub fn set_scene_light(&mut self) {
        self.light_type = LightType::SceneLight;
    }

    /// Points the light along a direction given by elevation and azimuth,
    /// both in degrees.
    ///
    /// The light becomes directional with its focal point at the origin and
    /// its position on the unit sphere, so elevation 90 shines straight
    /// down the y axis and azimuth rotates around it.
    pub fn set_direction_angle(&mut self, elevation_deg: f32, azimuth_deg: f32) {
        self.positional = false;
        self.focal_point = Vec3::ZERO;
        let elevation = elevation_deg.to_radians();
        let azimuth = azimuth_deg.to_radians();
        self.position = Vec3::new(
            elevation.cos() * azimuth.sin(),
            elevation.sin(),
            elevation.cos() * azimuth.cos(),
        );
    }
}
