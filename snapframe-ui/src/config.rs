//! Template catalog and export settings.
//!
//! Templates are decorative overlays with a transparent cutout; the user's
//! photograph is composited beneath the active one. All templates are
//! expected to share the dimensions of the first entry, which establishes
//! the canvas frame at startup.

/// One selectable template.
pub struct TemplateConfig {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Full-resolution overlay drawn onto the canvas.
    pub path: &'static str,
    /// Small preview shown in the picker.
    pub thumb_path: &'static str,
}

/// Every template the picker offers. The first entry is loaded at startup
/// and defines the canvas frame.
pub const TEMPLATES: &[TemplateConfig] = &[
    TemplateConfig {
        id: "classic",
        display_name: "Classic",
        path: "templates/template1.png",
        thumb_path: "templates/thumbs/template1.png",
    },
    TemplateConfig {
        id: "festive",
        display_name: "Festive",
        path: "templates/template2.png",
        thumb_path: "templates/thumbs/template2.png",
    },
    TemplateConfig {
        id: "rounded",
        display_name: "Rounded",
        path: "templates/template3.png",
        thumb_path: "templates/thumbs/template3.png",
    },
    TemplateConfig {
        id: "polaroid",
        display_name: "Polaroid",
        path: "templates/template4.png",
        thumb_path: "templates/thumbs/template4.png",
    },
    TemplateConfig {
        id: "minimal",
        display_name: "Minimal",
        path: "templates/template5.png",
        thumb_path: "templates/thumbs/template5.png",
    },
];

/// Filename handed to the browser for downloads and shares.
pub const OUTPUT_FILENAME: &str = "my-framed-photo.png";

/// Look up a template by its id.
pub fn get_template(id: &str) -> Option<&'static TemplateConfig> {
    TEMPLATES.iter().find(|t| t.id == id)
}
