use crate::{
    component::{Authority, Scheme},
    error::ParseError,
    parts::Parts,
    pct_enc::EStr,
};

type Result<T> = core::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            kind: crate::error::ParseErrorKind::$kind,
        })
    };
}

/// The longest port accepted, in characters.
const MAX_PORT_LEN: usize = 5;

pub(crate) fn parse(s: &str) -> Result<Parts<'_>> {
    let mut out = Parts::default();
    let bytes = s.as_bytes();
    let colon = bytes.iter().position(|&x| x == b':');

    if let Some(colon) = colon.filter(|&i| is_scheme(&bytes[..i])) {
        parse_from_scheme(s, colon, &mut out)?;
    } else if let Some(colon) = colon.filter(|&i| may_precede_port(bytes, i)) {
        // Something like `user@host:80`, which has no scheme but a port.
        if looks_like_port(&bytes[colon + 1..]) {
            let start = if bytes.starts_with(b"//") { 2 } else { 0 };
            parse_from_authority(s, start, &mut out)?;
        } else {
            parse_from_slashes(s, &mut out)?;
        }
    } else {
        parse_from_slashes(s, &mut out)?;
    }
    Ok(out)
}

fn parse_from_scheme<'a>(s: &'a str, colon: usize, out: &mut Parts<'a>) -> Result<()> {
    let scheme = Scheme::new(&s[..colon]);
    let rest = &s.as_bytes()[colon + 1..];

    if rest.is_empty() {
        out.scheme = Some(scheme);
    } else if rest[0] != b'/' {
        if looks_like_port(rest) {
            // `example.com:8080/path`: the "scheme" is really a host.
            parse_from_authority(s, 0, out)?;
        } else {
            out.scheme = Some(scheme);
            parse_path(s, colon + 1, out);
        }
    } else if rest.starts_with(b"//") {
        out.scheme = Some(scheme);
        if rest.get(2) == Some(&b'/') && scheme.as_str().eq_ignore_ascii_case("file") {
            parse_path(s, colon + 3, out);
        } else {
            parse_from_authority(s, colon + 3, out)?;
        }
    } else {
        out.scheme = Some(scheme);
        parse_path(s, colon + 1, out);
    }
    Ok(())
}

/// Parses a string without a scheme: a network-path or a bare path.
fn parse_from_slashes<'a>(s: &'a str, out: &mut Parts<'a>) -> Result<()> {
    if s.starts_with("//") {
        parse_from_authority(s, 2, out)
    } else {
        parse_path(s, 0, out);
        Ok(())
    }
}

fn parse_from_authority<'a>(s: &'a str, start: usize, out: &mut Parts<'a>) -> Result<()> {
    let end = parse_authority(s, start, out)?;
    parse_path(s, end, out);
    Ok(())
}

fn is_scheme(bytes: &[u8]) -> bool {
    !bytes.is_empty()
        && bytes
            .iter()
            .all(|&x| x.is_ascii_alphanumeric() || matches!(x, b'+' | b'-' | b'.'))
}

/// Checks whether the colon at `i`, which does not end a scheme, may be
/// followed by a port.
///
/// The colon must not be the last byte nor come after a `?`. The text
/// before it must be a network-path or contain no slash, so that colons in
/// relative paths like `/a:1` are left to the path.
fn may_precede_port(bytes: &[u8], i: usize) -> bool {
    let before = &bytes[..i];
    i + 1 < bytes.len()
        && !before.contains(&b'?')
        && (before.starts_with(b"//") || !before.contains(&b'/'))
}

/// Checks whether the text after a colon is a port, as in `:8080/path`.
fn looks_like_port(rest: &[u8]) -> bool {
    let digits = rest.iter().take_while(|x| x.is_ascii_digit()).count();
    (1..=MAX_PORT_LEN).contains(&digits) && matches!(rest.get(digits), None | Some(b'/'))
}

/// Parses the authority starting at `start`, returning its end.
fn parse_authority<'a>(s: &'a str, start: usize, out: &mut Parts<'a>) -> Result<usize> {
    let end = s[start..]
        .find(['/', '?', '#'])
        .map_or(s.len(), |i| start + i);

    let mut auth = Authority {
        user: None,
        password: None,
        host: EStr::EMPTY,
        port: None,
    };

    let mut host_start = start;
    if let Some(i) = s[start..end].rfind('@') {
        let userinfo = &s[start..start + i];
        match userinfo.split_once(':') {
            Some((user, password)) => {
                auth.user = Some(EStr::new(user));
                auth.password = Some(EStr::new(password));
            }
            None => auth.user = Some(EStr::new(userinfo)),
        }
        host_start = start + i + 1;
    }

    let mut host_end = end;
    let host_port = &s[host_start..end];
    if !host_port.ends_with(']') {
        if let Some(i) = host_port.rfind(':') {
            host_end = host_start + i;
            auth.port = parse_port(&host_port[i + 1..], host_end)?;
        }
    }

    if host_start == host_end {
        err!(host_start, EmptyHost);
    }
    auth.host = EStr::new(&s[host_start..host_end]);

    out.authority = Some(auth);
    Ok(end)
}

fn parse_port(port: &str, colon: usize) -> Result<Option<u16>> {
    if port.is_empty() {
        return Ok(None);
    }
    if port.len() > MAX_PORT_LEN || !port.bytes().all(|x| x.is_ascii_digit()) {
        err!(colon, InvalidPort);
    }
    match port.parse() {
        Ok(port) => Ok(Some(port)),
        Err(_) => err!(colon, InvalidPort),
    }
}

/// Parses the path, query and fragment starting at `start`.
fn parse_path<'a>(s: &'a str, start: usize, out: &mut Parts<'a>) {
    let mut rest = &s[start..];

    if let Some((r, fragment)) = rest.split_once('#') {
        out.fragment = Some(EStr::new(fragment));
        rest = r;
    }
    if let Some((r, query)) = rest.split_once('?') {
        out.query = Some(EStr::new(query));
        rest = r;
    }
    out.path = EStr::new(rest);
}
