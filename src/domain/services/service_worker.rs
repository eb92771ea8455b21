//! Service worker template
//!
//! The template is fixed; the only variable part is the messaging sender id.

/// Placeholder replaced by the sender id.
pub const SENDER_ID_TOKEN: &str = "[SENDER_ID]";

pub const SERVICE_WORKER_TEMPLATE: &str = r#"
(function() {
  importScripts('./firebase-app.js');
  importScripts('./firebase-messaging.js');

  firebase.initializeApp({
    messagingSenderId: '[SENDER_ID]'
  });

  const messaging = firebase.messaging();

  self.addEventListener('push', (event) => {
    event.stopImmediatePropagation();
  });
  
  self.addEventListener('pushsubscriptionchange', (event) => {
    event.stopImmediatePropagation();
  });

  messaging.setBackgroundMessageHandler(msgPayload => {
    return messaging.sendMessageToWindowClients_(msgPayload);
  });
})();
"#;

/// Render the service worker for `sender_id`.
///
/// Substitution is literal: the value is not escaped.
pub fn render_service_worker(sender_id: &str) -> String {
    SERVICE_WORKER_TEMPLATE.replacen(SENDER_ID_TOKEN, sender_id, 1)
}
