use url::Url;

/// Social and platform domains excluded from external link checking
///
/// Link health on these hosts is outside the site owner's control and their
/// anti-bot responses produce false positives, so candidates pointing at them
/// are dropped entirely rather than marked.
pub const SOCIAL_DOMAINS: &[&str] = &[
    "facebook.com",
    "fb.com",
    "m.facebook.com",
    "twitter.com",
    "t.co",
    "x.com",
    "instagram.com",
    "linkedin.com",
    "youtube.com",
    "youtu.be",
    "pinterest.com",
    "tiktok.com",
    "snapchat.com",
    "whatsapp.com",
    "telegram.org",
    "discord.com",
    "reddit.com",
    "tumblr.com",
    "flickr.com",
    "vimeo.com",
    "medium.com",
    "github.com",
    "bit.ly",
    "tinyurl.com",
    "goo.gl",
];

/// Checks whether a hostname belongs to the social-domain denylist
///
/// Matches the domain exactly or as a dot-separated suffix, so both
/// `facebook.com` and `www.facebook.com` match the `facebook.com` entry
/// while `notfacebook.com` does not.
pub fn is_social_domain(host: &str) -> bool {
    SOCIAL_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
}

/// Checks whether two URLs share an origin (scheme, host, and port)
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.origin() == b.origin()
}
