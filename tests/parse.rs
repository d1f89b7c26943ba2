use url_canon::{ParseErrorKind::*, *};

#[test]
fn parse_absolute() {
    let p = Parts::parse("ftp://ftp.is.co.za/rfc/rfc1808.txt").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "ftp");
    let a = p.authority().unwrap();
    assert_eq!(a.user(), None);
    assert_eq!(a.password(), None);
    assert_eq!(a.host(), "ftp.is.co.za");
    assert_eq!(a.port(), None);
    assert_eq!(p.path(), "/rfc/rfc1808.txt");
    assert_eq!(p.query(), None);
    assert_eq!(p.fragment(), None);

    let p = Parts::parse("foo://user:pa:ss@example.com:8042/over/there?name=ferret#nose").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "foo");
    let a = p.authority().unwrap();
    assert_eq!(a.user().unwrap(), "user");
    assert_eq!(a.password().unwrap(), "pa:ss");
    assert_eq!(a.host(), "example.com");
    assert_eq!(a.port(), Some(8042));
    assert_eq!(p.path(), "/over/there");
    assert_eq!(p.query().unwrap(), "name=ferret");
    assert_eq!(p.fragment().unwrap(), "nose");

    // The userinfo ends at the last '@'.
    let p = Parts::parse("http://a@b@c/").unwrap();
    let a = p.authority().unwrap();
    assert_eq!(a.user().unwrap(), "a@b");
    assert_eq!(a.host(), "c");

    let p = Parts::parse("ldap://[2001:db8::7]/c=GB?objectClass?one").unwrap();
    let a = p.authority().unwrap();
    assert_eq!(a.host(), "[2001:db8::7]");
    assert_eq!(a.port(), None);
    assert_eq!(p.path(), "/c=GB");
    assert_eq!(p.query().unwrap(), "objectClass?one");

    let p = Parts::parse("http://[::1]:8080").unwrap();
    let a = p.authority().unwrap();
    assert_eq!(a.host(), "[::1]");
    assert_eq!(a.port(), Some(8080));
    assert!(p.path().is_empty());

    // Empty port.
    let p = Parts::parse("http://example.com:/").unwrap();
    assert_eq!(p.authority().unwrap().port(), None);
    assert_eq!(p.path(), "/");

    // The authority ends at '?' and '#' as well.
    let p = Parts::parse("http://example.com?q#f").unwrap();
    assert_eq!(p.authority().unwrap().host(), "example.com");
    assert!(p.path().is_empty());
    assert_eq!(p.query().unwrap(), "q");
    assert_eq!(p.fragment().unwrap(), "f");
}

#[test]
fn parse_scheme_forms() {
    // Scheme only.
    let p = Parts::parse("http:").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "http");
    assert!(!p.has_authority());
    assert!(p.path().is_empty());

    // Rootless path.
    let p = Parts::parse("mailto:John.Doe@example.com").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "mailto");
    assert!(!p.has_authority());
    assert_eq!(p.path(), "John.Doe@example.com");

    let p = Parts::parse("urn:oasis:names:specification:docbook:dtd:xml:4.1.2").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "urn");
    assert_eq!(p.path(), "oasis:names:specification:docbook:dtd:xml:4.1.2");

    // Absolute path without authority.
    let p = Parts::parse("foo:/bar").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "foo");
    assert!(!p.has_authority());
    assert_eq!(p.path(), "/bar");

    // `file:///` is a path, not an empty authority.
    let p = Parts::parse("FILE:///etc/hosts").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "FILE");
    assert!(!p.has_authority());
    assert_eq!(p.path(), "/etc/hosts");

    let p = Parts::parse("file://server/share").unwrap();
    assert_eq!(p.authority().unwrap().host(), "server");
    assert_eq!(p.path(), "/share");

    // Scheme characters.
    let p = Parts::parse("svn+ssh.v-2://host").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "svn+ssh.v-2");
}

#[test]
fn parse_host_port_without_scheme() {
    let p = Parts::parse("example.com:8080/path").unwrap();
    assert!(p.scheme().is_none());
    let a = p.authority().unwrap();
    assert_eq!(a.host(), "example.com");
    assert_eq!(a.port(), Some(8080));
    assert_eq!(p.path(), "/path");

    let p = Parts::parse("localhost:80").unwrap();
    assert_eq!(p.authority().unwrap().port(), Some(80));

    let p = Parts::parse("user@localhost:80").unwrap();
    assert!(p.scheme().is_none());
    let a = p.authority().unwrap();
    assert_eq!(a.user().unwrap(), "user");
    assert_eq!(a.host(), "localhost");
    assert_eq!(a.port(), Some(80));

    // Six digits are not a port, so this is a scheme and a path.
    let p = Parts::parse("a:123456").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "a");
    assert_eq!(p.path(), "123456");

    // Digits followed by something else than '/' are not a port either.
    let p = Parts::parse("tel:123-456").unwrap();
    assert_eq!(p.scheme().unwrap().as_str(), "tel");
    assert_eq!(p.path(), "123-456");
}

#[test]
fn parse_relative() {
    let p = Parts::parse("//example.com/a").unwrap();
    assert!(p.scheme().is_none());
    assert_eq!(p.authority().unwrap().host(), "example.com");
    assert_eq!(p.path(), "/a");

    let p = Parts::parse("//example.com:81/a:b").unwrap();
    let a = p.authority().unwrap();
    assert_eq!(a.host(), "example.com");
    assert_eq!(a.port(), Some(81));
    assert_eq!(p.path(), "/a:b");

    let p = Parts::parse("/a/b:1?c:d#e").unwrap();
    assert!(p.scheme().is_none());
    assert!(!p.has_authority());
    assert_eq!(p.path(), "/a/b:1");
    assert_eq!(p.query().unwrap(), "c:d");
    assert_eq!(p.fragment().unwrap(), "e");

    let p = Parts::parse("a/b:c").unwrap();
    assert_eq!(p.path(), "a/b:c");

    // A percent-encoded colon does not end a scheme.
    let p = Parts::parse("http%3A%2F%2Fexample.com").unwrap();
    assert!(p.scheme().is_none());
    assert_eq!(p.path(), "http%3A%2F%2Fexample.com");

    let p = Parts::parse("").unwrap();
    assert_eq!(p, Parts::default());
}

#[test]
fn parse_empty_query_and_fragment() {
    let p = Parts::parse("a").unwrap();
    assert_eq!(p.query(), None);
    assert_eq!(p.fragment(), None);

    let p = Parts::parse("a?#").unwrap();
    assert_eq!(p.path(), "a");
    assert_eq!(p.query().unwrap(), "");
    assert_eq!(p.fragment().unwrap(), "");

    // '?' after '#' belongs to the fragment.
    let p = Parts::parse("a#b?c").unwrap();
    assert_eq!(p.query(), None);
    assert_eq!(p.fragment().unwrap(), "b?c");
}

#[test]
fn parse_error() {
    let e = Parts::parse("http://").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), EmptyHost);
    assert_eq!(e.to_string(), "empty host at index 7");

    let e = Parts::parse("http://user@:80/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (12, EmptyHost));

    let e = Parts::parse("///path").unwrap_err();
    assert_eq!((e.index(), e.kind()), (2, EmptyHost));

    let e = Parts::parse("http://example.com:abc/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (18, InvalidPort));
    assert_eq!(e.to_string(), "invalid port at index 18");

    let e = Parts::parse("http://example.com:65536/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (18, InvalidPort));

    let e = Parts::parse("http://example.com:000080/").unwrap_err();
    assert_eq!(e.kind(), InvalidPort);

    let e = Parts::parse("localhost:99999").unwrap_err();
    assert_eq!((e.index(), e.kind()), (9, InvalidPort));
}
