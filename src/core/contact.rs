use crate::core::modal::ModalController;
use crate::core::notify::Notifier;
use crate::domain::view::Patch;

/// Contact modal submission. All three fields are required; a valid
/// submission thanks the sender, closes the modal and resets the form.
/// No server round-trip is involved.
pub fn submit_contact(
    modals: &mut ModalController,
    notifier: &Notifier,
    name: &str,
    email: &str,
    message: &str,
) -> Vec<Patch> {
    let name = name.trim();
    if name.is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        notifier.error("Please fill in all fields.");
        return Vec::new();
    }

    notifier.success(format!(
        "Form submitted successfully! Thanks for your message, {name}."
    ));
    let mut patches = modals.close_all();
    patches.push(Patch::ContactFormReset);
    patches
}
