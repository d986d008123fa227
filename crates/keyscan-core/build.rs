use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("scancode.rs");
    let mut f = File::create(&dest_path).unwrap();

    // Generate the Scancode newtype wrapper
    writeln!(
        f,
        r#"
/// A single PC/AT set 1 scancode byte.
///
/// This is a newtype wrapper around u8 for type safety.
/// Make (press) codes live below 0x80; the matching break (release)
/// code is the make code plus 0x80.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Scancode(pub u8);

impl Scancode {{
    /// Get the break code paired with this make code
    pub const fn release(self) -> Scancode {{
        Scancode(self.0.wrapping_add(0x80))
    }}

    /// Render the make code followed by its break code ("1e 9e")
    pub fn press_release(self) -> String {{
        format!("{{}} {{}}", self, self.release())
    }}
}}

impl fmt::Display for Scancode {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        write!(f, "{{:02x}}", self.0)
    }}
}}

impl FromStr for Scancode {{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {{
        u8::from_str_radix(s, 16)
            .map(Scancode)
            .map_err(|_| format!("Invalid scancode: {{}}", s))
    }}
}}
"#
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
