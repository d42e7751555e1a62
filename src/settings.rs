//! Motion preferences and device heuristics
//!
//! Persisted in LocalStorage so a visitor can force reduced motion or turn
//! individual effects off.

use serde::{Deserialize, Serialize};

use crate::consts::{DESKTOP_PARTICLES, MOBILE_BREAKPOINT, MOBILE_PARTICLES};

/// Coarse device class from viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Anything narrower than the breakpoint is presumed mobile
    pub fn from_viewport_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "Mobile",
            DeviceClass::Desktop => "Desktop",
        }
    }

    /// Backdrop particle count
    pub fn particle_count(&self) -> usize {
        match self {
            DeviceClass::Mobile => MOBILE_PARTICLES,
            DeviceClass::Desktop => DESKTOP_PARTICLES,
        }
    }
}

/// Whether animations play in full or collapse to their end state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPolicy {
    #[default]
    Full,
    Reduced,
}

impl MotionPolicy {
    /// Time multiplier applied to reveal and entry animations
    pub fn time_scale(&self) -> f64 {
        match self {
            MotionPolicy::Full => 1.0,
            MotionPolicy::Reduced => 0.0,
        }
    }

    pub fn is_reduced(&self) -> bool {
        *self == MotionPolicy::Reduced
    }
}

/// Visitor motion preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Force reduced motion regardless of the OS preference
    pub reduced_motion: bool,
    /// Canvas particle backdrop
    pub particles: bool,
    /// Decorative cursor follower
    pub cursor_follower: bool,
    /// Links/buttons drift toward the pointer
    pub magnetic_hover: bool,
    /// Typing terminal in the hero section
    pub terminal: bool,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            particles: true,
            cursor_follower: true,
            magnetic_hover: true,
            terminal: true,
        }
    }
}

impl MotionSettings {
    /// Combine the stored preference with the platform's
    /// `prefers-reduced-motion`
    pub fn policy(&self, platform_prefers_reduced: bool) -> MotionPolicy {
        if self.reduced_motion || platform_prefers_reduced {
            MotionPolicy::Reduced
        } else {
            MotionPolicy::Full
        }
    }

    /// Effective magnetic hover (respects reduced motion)
    pub fn effective_magnetic_hover(&self, policy: MotionPolicy) -> bool {
        self.magnetic_hover && !policy.is_reduced()
    }

    /// Effective particle count for a device
    pub fn particle_count(&self, device: DeviceClass) -> usize {
        if !self.particles {
            0
        } else {
            device.particle_count()
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "folio_motion_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded motion settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored motion settings: {}", e),
                }
            }
        }

        log::info!("Using default motion settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Motion settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_breakpoint() {
        assert_eq!(DeviceClass::from_viewport_width(375.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_viewport_width(767.9), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_viewport_width(768.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::Mobile.particle_count(), 30);
        assert_eq!(DeviceClass::Desktop.particle_count(), 80);
    }

    #[test]
    fn test_policy_combines_sources() {
        let mut s = MotionSettings::default();
        assert_eq!(s.policy(false), MotionPolicy::Full);
        assert_eq!(s.policy(true), MotionPolicy::Reduced);
        s.reduced_motion = true;
        assert_eq!(s.policy(false), MotionPolicy::Reduced);
        assert_eq!(MotionPolicy::Reduced.time_scale(), 0.0);
    }

    #[test]
    fn test_effective_flags() {
        let mut s = MotionSettings::default();
        assert!(s.effective_magnetic_hover(MotionPolicy::Full));
        assert!(!s.effective_magnetic_hover(MotionPolicy::Reduced));
        assert_eq!(s.particle_count(DeviceClass::Mobile), 30);
        s.particles = false;
        assert_eq!(s.particle_count(DeviceClass::Desktop), 0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: MotionSettings = serde_json::from_str(r#"{"particles": false}"#).unwrap();
        assert!(!s.particles);
        assert!(s.terminal);
        assert!(s.cursor_follower);
        assert!(!s.reduced_motion);
    }
}
