// Prompt composition: fixed gouache style template + refinement passthrough

/// Placeholder substituted with the user's subject text.
const SUBJECT_PLACEHOLDER: &str = "{subject}";

/// Fixed style directives applied to every initial generation.
pub const STYLE_TEMPLATE: &str = "A gouache illustration of {subject}, \
painted in a warm mid-century palette of ochre, teal, and dusty rose, \
with visible matte brush strokes and soft paper grain, \
framed as a simple centered composition on a cream background";

/// Merge the style template with the user's subject text.
///
/// Precondition: `subject.trim()` is non-empty. The session checks this
/// before invoking, so it is not re-validated here.
pub fn compose_generation_prompt(subject: &str) -> String {
    STYLE_TEMPLATE.replace(SUBJECT_PLACEHOLDER, subject.trim())
}

/// Refinement text passes through unchanged apart from trimming.
///
/// Same non-empty precondition as [`compose_generation_prompt`].
pub fn compose_edit_prompt(text: &str) -> String {
    text.trim().to_string()
}
