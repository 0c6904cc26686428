//! Caller metadata and Rust item path parsing

/// Where a log call came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    /// Source file basename
    pub file: String,
    /// Line number
    pub line: String,
    /// Function name including `()`, `Type.method()` for methods
    pub function: String,
    /// Module path
    pub module: String,
}

impl CallerInfo {
    pub const UNKNOWN_FILE: &'static str = "Unknown source file";
    pub const UNKNOWN_LINE: &'static str = "0";
    pub const UNKNOWN_FUNCTION: &'static str = "Unknown function";
    pub const UNKNOWN_MODULE: &'static str = "Unknown package";

    /// Placeholders used when nothing about the caller is known
    pub fn unknown() -> Self {
        Self {
            file: Self::UNKNOWN_FILE.to_string(),
            line: Self::UNKNOWN_LINE.to_string(),
            function: Self::UNKNOWN_FUNCTION.to_string(),
            module: Self::UNKNOWN_MODULE.to_string(),
        }
    }

    /// Known file and line, unknown function and module
    pub fn at(file: &str, line: u32) -> Self {
        Self {
            file: basename(file).to_string(),
            line: line.to_string(),
            ..Self::unknown()
        }
    }

    /// Build from a file, a line, the item path of the enclosing function
    /// (`std::any::type_name` or backtrace symbol form) and a module path
    pub fn from_parts(file: &str, line: u32, function_path: &str, module: &str) -> Self {
        let mut info = Self::at(file, line);
        if let Some((_, function)) = parse_function_path(function_path) {
            info.function = format!("{}()", function);
        }
        if !module.is_empty() {
            info.module = module.to_string();
        }
        info
    }

    /// Build from a backtrace symbol, taking the module from the symbol itself
    pub fn from_symbol(file: &str, line: u32, symbol: &str) -> Self {
        let mut info = Self::at(file, line);
        if let Some((module, function)) = parse_function_path(symbol) {
            info.function = format!("{}()", function);
            if !module.is_empty() {
                info.module = module;
            }
        }
        info
    }
}

/// Last path component, for either separator
fn basename(file: &str) -> &str {
    file.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(file)
}

/// Split an item path into `(module, function)`
///
/// Methods come back as `Type.method`. Trailing closure segments and symbol
/// hashes are dropped.
pub(crate) fn parse_function_path(path: &str) -> Option<(String, String)> {
    let mut segments: Vec<&str> = split_segments(path.trim())
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();

    if segments.last().map_or(false, |s| is_symbol_hash(s)) {
        segments.pop();
    }
    while segments.last().map_or(false, |s| s.starts_with('{')) {
        segments.pop();
    }

    let function = segments.pop()?;
    if function.starts_with('<') {
        return None;
    }

    let owner = segments.last().copied();
    match owner {
        // <crate::Type as crate::Trait>::method
        Some(owner) if owner.starts_with('<') => {
            segments.pop();
            let inner = owner
                .strip_prefix('<')
                .and_then(|s| s.strip_suffix('>'))
                .unwrap_or(owner);
            let self_ty = inner.split(" as ").next().unwrap_or(inner);
            let ty_segments = split_segments(self_ty);
            let (ty, ty_module) = ty_segments.split_last()?;
            let module = if ty_module.is_empty() {
                segments.join("::")
            } else {
                ty_module.join("::")
            };
            Some((module, format!("{}.{}", type_name(ty), function)))
        }
        // crate::module::Type::method
        Some(owner) if is_type_name(owner) => {
            segments.pop();
            Some((segments.join("::"), format!("{}.{}", type_name(owner), function)))
        }
        _ => Some((segments.join("::"), function.to_string())),
    }
}

/// Split at top-level `::`, keeping `<...>` groups whole
fn split_segments(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments
}

fn is_symbol_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn is_type_name(segment: &str) -> bool {
    segment.chars().next().map_or(false, |c| c.is_ascii_uppercase())
}

/// `&mut Foo<T>` -> `Foo`
fn type_name(ty: &str) -> &str {
    let ty = ty.trim_start_matches('&').trim_start_matches("mut ").trim();
    ty.split('<').next().unwrap_or(ty)
}
