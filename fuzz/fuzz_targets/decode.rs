#![no_main]
use libfuzzer_sys::fuzz_target;
use url_canon::pct_enc::{
    component::{Fragment, Host, Path, Query, Userinfo},
    decode_lossless, EStr,
};

fuzz_target!(|data: &str| {
    let _ = decode_lossless(data);

    macro_rules! check {
        ($($c:ty),+) => {$(
            let once = EStr::<$c>::new(data).decode_preserving();
            let twice = EStr::<$c>::new(&once).decode_preserving();
            // Decoding stops at a fixed point.
            assert_eq!(&*once, &*twice);
        )+};
    }
    check!(Userinfo, Host, Path, Query, Fragment);
});
