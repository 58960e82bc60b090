//! Day/night cycle: a clock advanced on a fixed tick, with a background color
//! and sun/moon rotation derived purely from the clock.

use super::constants::DAY_NIGHT_START_HOUR;

/// Linear RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Interpolate toward `other`; `t` is clamped to `0..=1`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Component-wise product, used to tint a skin color by daylight.
    pub fn modulate(self, other: Rgb) -> Rgb {
        Rgb {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }

    pub fn to_bytes(self) -> (u8, u8, u8) {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (byte(self.r), byte(self.g), byte(self.b))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayNightCycle {
    pub hours: u32,
    pub minutes: u32,
    pub day_color: Rgb,
    pub night_color: Rgb,
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl DayNightCycle {
    pub fn new() -> Self {
        Self::at(DAY_NIGHT_START_HOUR, 0)
    }

    pub fn at(hours: u32, minutes: u32) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
            day_color: Rgb::WHITE,
            night_color: Rgb::BLACK,
        }
    }

    /// Advance the clock by one minute.
    pub fn tick(&mut self) {
        self.minutes = (self.minutes + 1) % 60;
        if self.minutes == 0 {
            self.hours = (self.hours + 1) % 24;
        }
    }

    /// 0.0 at midnight, 0.5 at noon.
    pub fn time_of_day(&self) -> f32 {
        (self.hours as f32 + self.minutes as f32 / 60.0) / 24.0
    }

    pub fn background_color(&self) -> Rgb {
        // Shifted so noon lands on 0.0 (full daylight).
        let adjusted = (self.time_of_day() + 0.5) % 1.0;
        if adjusted < 0.5 {
            self.day_color.lerp(self.night_color, adjusted * 2.0)
        } else {
            self.night_color.lerp(self.day_color, (adjusted - 0.5) * 2.0)
        }
    }

    /// Sun/moon icon rotation in degrees, 180 at midnight.
    pub fn icon_rotation(&self) -> f32 {
        (self.time_of_day() * 360.0 + 180.0) % 360.0
    }

    pub fn clock_text(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }

    /// True while the icon shows the sun (06:00 to 17:59).
    pub fn is_daytime(&self) -> bool {
        (6..18).contains(&self.hours)
    }
}
