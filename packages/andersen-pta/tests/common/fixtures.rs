//! Test fixture programs

use super::builders::program;
use andersen_pta::Function;

/// `p=alloc; x=y; x=z; *p=z; p=q; q=&y; x=*p; p=&z`
pub fn fixture_scenario_a() -> Function {
    program(
        "scenario_a",
        &[
            "p = alloc",
            "x = y",
            "x = z",
            "*p = z",
            "p = q",
            "q = &y",
            "x = *p",
            "p = &z",
        ],
    )
}

/// `a=&i; b=&k; a=&j; p=&a; q=&b; p=q; c=*q`
pub fn fixture_scenario_b() -> Function {
    program(
        "scenario_b",
        &[
            "a = &i",
            "b = &k",
            "a = &j",
            "p = &a",
            "q = &b",
            "p = q",
            "c = *q",
        ],
    )
}

/// Pointer swapped through a double indirection
///
/// `pp` points to `p`; storing `r` through it makes `p` see what `r` sees.
pub fn fixture_double_pointer() -> Function {
    program(
        "double_pointer",
        &[
            "p = &x",
            "r = &y",
            "pp = &p",
            "*pp = r",
            "t = *pp",
        ],
    )
}

/// Copy cycle `c0 → c1 → ... → c0` fed from one allocation
pub fn fixture_copy_cycle(len: usize) -> Function {
    let names: Vec<String> = (0..len).map(|i| format!("c{i}")).collect();
    let mut stmts: Vec<String> = vec![format!("{} = alloc", names[0])];
    for i in 0..len {
        stmts.push(format!("{} = {}", names[(i + 1) % len], names[i]));
    }
    let refs: Vec<&str> = stmts.iter().map(String::as_str).collect();
    program("copy_cycle", &refs)
}

/// Load/store cycle through one pointer: `x = *p; *p = x`
pub fn fixture_deref_cycle() -> Function {
    program(
        "deref_cycle",
        &["p = &o", "q = &o", "x = *p", "*p = x", "x = alloc", "y = *q"],
    )
}
