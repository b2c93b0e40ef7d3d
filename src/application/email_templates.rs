const WELCOME_SUBJECT: &str = "Quick question before I send your access";

const WELCOME_TEXT: &str = "Hi there,

You are on the list for The Bridge.

I’m manually rolling out access to the first 50 people today. I want to make sure the version I send you works perfectly with your setup.

Quick question: Which browser do you use?

Chrome

Brave

Edge

Arc

Just reply with the name.

As soon as I see your reply, I’ll tag your email for the next drop.

Talk soon,

Daniel Founder @ The Bridge";

const WELCOME_HTML: &str = r#"<p>Hi there,</p>
<p>You are on the list for The Bridge.</p>
<p>I’m manually rolling out access to the first 50 people today. I want to make sure the version I send you works perfectly with your setup.</p>
<p><strong>Quick question: Which browser do you use?</strong></p>
<ul>
<li>Chrome</li>
<li>Brave</li>
<li>Edge</li>
<li>Arc</li>
</ul>
<p>Just reply with the name.</p>
<p>As soon as I see your reply, I’ll tag your email for the next drop.</p>
<p>Talk soon,</p>
<p>Daniel<br>Founder @ The Bridge</p>"#;

/// Fixed-content message with plain text and HTML alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: &'static str,
    pub text: &'static str,
    pub html: &'static str,
}

/// The welcome email sent to every new signup. Identical for all recipients.
pub fn welcome_email() -> EmailContent {
    EmailContent {
        subject: WELCOME_SUBJECT,
        text: WELCOME_TEXT,
        html: WELCOME_HTML,
    }
}
