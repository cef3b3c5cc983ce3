//! Game asset declarations

use crate::config::AssetConfig;
use arcade_engine::assets::{AssetError, AssetManager};
use arcade_engine::audio::{AudioError, AudioSystem};
use arcade_engine::foundation::math::Vec2;

/// Ship image key, also used for the lives display
pub const SHIP_TEXTURE: &str = "spaceship";

/// Bullet image key
pub const BULLET_TEXTURE: &str = "bullet";

/// Thruster flame image key
pub const FLAME_TEXTURE: &str = "flame";

/// Looping thruster cue
pub const THRUSTER_SOUND: &str = "thruster";

/// Cue played when a bullet is fired
pub const FIRE_SOUND: &str = "bulletFired";

/// Declare every image and sound in the manifest
pub fn declare(assets: &mut AssetManager, manifest: &AssetConfig) -> Result<(), AssetError> {
    for image in &manifest.images {
        assets.load_image(image.clone())?;
    }
    for sound in &manifest.sounds {
        assets.load_audio(sound.clone())?;
    }
    log::debug!(
        "Declared {} images and {} sounds under {}",
        manifest.images.len(),
        manifest.sounds.len(),
        assets.root().display()
    );
    Ok(())
}

/// Bind a cue for every declared sound
pub fn bind_sounds(audio: &mut AudioSystem, assets: &AssetManager, manifest: &AssetConfig) -> Result<(), AudioError> {
    for sound in &manifest.sounds {
        audio.add(&sound.key, assets)?;
    }
    Ok(())
}

/// Pixel size of an image
pub fn image_size(assets: &AssetManager, key: &str) -> Result<Vec2, AssetError> {
    let image = assets.image(key)?;
    Ok(Vec2::new(image.width, image.height))
}

/// Collision radius for a sprite drawn with `key`
pub fn collision_radius(assets: &AssetManager, key: &str) -> Result<f32, AssetError> {
    Ok(assets.image(key)?.bounding_radius())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest_declares_everything() {
        let mut assets = AssetManager::new("assets");
        declare(&mut assets, &AssetConfig::default()).unwrap();

        assert_eq!(image_size(&assets, SHIP_TEXTURE).unwrap(), Vec2::new(48.0, 32.0));
        assert_eq!(collision_radius(&assets, "asteroid").unwrap(), 48.0);
        assert!(assets.audio(FIRE_SOUND).is_ok());
        assert!(assets.audio(THRUSTER_SOUND).is_ok());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut manifest = AssetConfig::default();
        manifest.images.push(manifest.images[0].clone());
        let mut assets = AssetManager::new("assets");
        assert!(matches!(declare(&mut assets, &manifest), Err(AssetError::Duplicate(_))));
    }
}
