//! Headless scene driver
//!
//! Places each configured entity's quad through the model matrix and the
//! viewport, producing the screen-space corners the renderer would upload.

use breakout_math::{MathError, Matrix4, Vector2, Vector3, Vector4, Viewport};

use crate::config::{AppConfig, EntityConfig, SceneConfig};

/// Translation, rotation and scale shared by every entity in the scene
#[derive(Clone, Copy, Debug)]
pub struct SceneTransform {
    pub translation: Vector4,
    /// Rotation about the X, Y and Z axes in degrees
    pub rotation_degrees: Vector3,
    pub scale: Vector4,
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self {
            translation: Vector4::ZERO,
            rotation_degrees: Vector3::ZERO,
            scale: Vector4::direction(1.0, 1.0, 1.0),
        }
    }
}

impl SceneTransform {
    pub fn from_config(config: &SceneConfig) -> Self {
        let [tx, ty, tz] = config.translation;
        let [rx, ry, rz] = config.rotation_degrees;
        let [sx, sy, sz] = config.scale;
        Self {
            translation: Vector4::point(tx, ty, tz),
            rotation_degrees: Vector3::new(rx, ry, rz),
            scale: Vector4::direction(sx, sy, sz),
        }
    }

    /// `translate * rotate_z * rotate_y * rotate_x * scale`
    pub fn model_matrix(&self) -> Matrix4 {
        let r = self.rotation_degrees;
        Matrix4::translate(self.translation)
            * Matrix4::rotate_z(r.z)
            * Matrix4::rotate_y(r.y)
            * Matrix4::rotate_x(r.x)
            * Matrix4::scale(self.scale)
    }
}

/// An axis-aligned quad in NDC
#[derive(Clone, Debug)]
pub struct Entity {
    pub name: String,
    pub position: Vector2,
    pub size: Vector2,
}

impl Entity {
    pub fn from_config(config: &EntityConfig) -> Self {
        Self {
            name: config.name.clone(),
            position: Vector2::new(config.position[0], config.position[1]),
            size: Vector2::new(config.size[0], config.size[1]),
        }
    }

    /// Corners counter-clockwise from the bottom-left
    pub fn corners(&self) -> [Vector2; 4] {
        let half = self.size * 0.5;
        let flipped = Vector2::new(half.x, -half.y);
        [
            self.position - half,
            self.position + flipped,
            self.position + half,
            self.position - flipped,
        ]
    }
}

/// Screen-space corners of one entity
#[derive(Clone, Debug)]
pub struct ScreenQuad {
    pub name: String,
    pub corners: [Vector3; 4],
}

pub struct Scene {
    transform: SceneTransform,
    viewport: Viewport,
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new(transform: SceneTransform, viewport: Viewport) -> Self {
        Self {
            transform,
            viewport,
            entities: Vec::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, MathError> {
        let viewport = config.window.viewport()?;
        let mut scene = Self::new(SceneTransform::from_config(&config.scene), viewport);
        for entity in &config.scene.entities {
            scene.add_entity(Entity::from_config(entity));
        }
        Ok(scene)
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn transform(&self) -> &SceneTransform {
        &self.transform
    }

    /// Map an NDC position through the model matrix onto the screen
    pub fn project(&self, model: &Matrix4, position: Vector2) -> Vector3 {
        let local = Vector3::new(position.x, position.y, 0.0).to_point();
        let world = model.transform(local).perspective_divide();
        self.viewport.to_screen_coords(world.to_vector3())
    }

    /// Compute the screen-space quad of every entity
    pub fn frame(&self) -> Vec<ScreenQuad> {
        let model = self.transform.model_matrix();
        let quads: Vec<ScreenQuad> = self
            .entities
            .iter()
            .map(|entity| {
                let corners = entity.corners().map(|c| self.project(&model, c));
                log::debug!("{} -> {:?}", entity.name, corners);
                ScreenQuad {
                    name: entity.name.clone(),
                    corners,
                }
            })
            .collect();

        log::info!(
            "Projected {} entities onto {}x{} viewport",
            quads.len(),
            self.viewport.width(),
            self.viewport.height()
        );
        quads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800, 600).unwrap()
    }

    #[test]
    fn test_default_transform_is_identity() {
        assert_eq!(SceneTransform::default().model_matrix(), Matrix4::identity());
    }

    #[test]
    fn test_model_matrix_order() {
        let transform = SceneTransform {
            translation: Vector4::point(5.0, 5.0, 5.0),
            rotation_degrees: Vector3::new(90.0, 0.0, 0.0),
            scale: Vector4::direction(2.0, 2.0, 2.0),
        };
        let p = transform.model_matrix().transform(Vector4::point(10.0, 20.0, 30.0));
        assert_eq!(p, Vector4::point(25.0, -55.0, 45.0));
    }

    #[test]
    fn test_entity_corners() {
        let entity = Entity {
            name: "tile".to_string(),
            position: Vector2::new(1.0, 1.0),
            size: Vector2::new(2.0, 4.0),
        };
        assert_eq!(
            entity.corners(),
            [
                Vector2::new(0.0, -1.0),
                Vector2::new(2.0, -1.0),
                Vector2::new(2.0, 3.0),
                Vector2::new(0.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_frame_identity_maps_to_pixels() {
        let mut scene = Scene::new(SceneTransform::default(), viewport());
        scene.add_entity(Entity {
            name: "full".to_string(),
            position: Vector2::ZERO,
            size: Vector2::new(2.0, 2.0),
        });

        let quads = scene.frame();
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].name, "full");
        assert_eq!(quads[0].corners[0], Vector3::new(0.0, 600.0, 0.0));
        assert_eq!(quads[0].corners[2], Vector3::new(800.0, 0.0, 0.0));
    }

    #[test]
    fn test_frame_applies_translation() {
        let transform = SceneTransform {
            translation: Vector4::point(0.5, 0.0, 0.0),
            ..SceneTransform::default()
        };
        let scene = Scene::new(transform, viewport());
        let screen = scene.project(&transform.model_matrix(), Vector2::ZERO);
        assert_eq!(screen, Vector3::new(600.0, 300.0, 0.0));
    }

    #[test]
    fn test_from_config() {
        let scene = Scene::from_config(&AppConfig::default()).unwrap();
        assert_eq!(scene.entities().len(), 2);
        assert_eq!(scene.entities()[0].name, "ball");
        assert_eq!(scene.frame().len(), 2);
    }

    #[test]
    fn test_from_config_rejects_empty_window() {
        let mut config = AppConfig::default();
        config.window.height = 0;
        assert!(Scene::from_config(&config).is_err());
    }
}
