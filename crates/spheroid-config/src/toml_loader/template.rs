//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Spheroid Configuration
# Only override what you want to change -- missing fields use defaults.

[deformer]
# base_radius = 200.0       # > 0
# amplitude_min = 0.0       # slider range for every mode
# amplitude_max = 50.0
# amplitude_step = 1.0      # change per key press
# initial_preset = "Default"  # Sphere, Default, Blobby, Spiky, Twisted, Organic, or a user preset

# [[deformer.extra_modes]]
# name = "Bulge"
# description = "Single equatorial bulge"
# amplitude = 0.0
# kind = { type = "harmonic", theta_freq = 1.0, phi_freq = 1.0 }
#   type: harmonic, cosine_harmonic (theta_freq, phi_freq), mixed_harmonic, noise (scale)

[renderer]
# light_direction = [0.5, -0.5, 0.7]   # normalized on load
# depth = 1.5               # 0-10, 0 = orthographic
# resolution_theta = 40     # 1-512
# resolution_phi = 20       # 1-512
# background = "#000000"
# outline = "rgba(255,255,255,25)"

[camera]
# orbit_radius = 500.0
# orbit_speed = 0.25        # radians per second
# rotation_x = 20.0
# rotation_speed = 0.0      # units per second

[display]
# width = 480               # headless surface, 8-4096
# height = 480
# cell_pixels = 4           # surface pixels per terminal column, 1-16
# fps = 30                  # 1-240

[logging]
# level = "INFO"            # DEBUG, INFO, WARNING, ERROR
# file = "/tmp/spheroid.log"

# [[presets]]
# name = "Mine"
# amplitudes = [20.0, 10.0, 5.0, 0.0, 0.0, 0.0, 0.0]
"##
    .to_string()
}
