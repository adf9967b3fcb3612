//! Compile-time GPIO pin configuration.
//!
//! Mirrors an nRF-style PIN_CNF register: every option is a typed constant,
//! the pack is validated in const eval, and the final register word exists
//! before the program runs. Misconfiguration (an option the pin does not
//! accept, or the same option twice) is a build failure, not a runtime one.
//!
//! Run with: cargo run --example gpio_pin

use param_pack::prelude::*;
use param_pack::{params, type_set, validate_params};

// =============================================================================
// Pin options (PIN_CNF fields)
// =============================================================================

/// Input buffer connection.
#[derive(Clone, Copy, ConfigParam)]
enum Input {
    Connected = 0,
    #[param(default)]
    Disconnected = 1,
}

/// Pull resistor selection.
#[derive(Clone, Copy, ConfigParam)]
enum Pull {
    Disabled = 0,
    Down = 1,
    Up = 3,
}

/// Output drive strength (standard/high per level).
#[derive(Clone, Copy, ConfigParam)]
enum Drive {
    S0S1 = 0,
    H0S1 = 1,
    S0H1 = 2,
    H0H1 = 3,
    D0S1 = 4,
    D0H1 = 5,
    S0D1 = 6,
    H0D1 = 7,
}

/// Level that wakes the chip from sleep.
#[derive(Clone, Copy, ConfigParam)]
enum Sense {
    Disabled = 0,
    High = 2,
    Low = 3,
}

/// Which core owns the pin on dual-core parts.
#[derive(Clone, Copy, ConfigParam)]
enum McuSel {
    AppMcu = 0,
    NetworkMcu = 1,
    Peripheral = 4,
}

// =============================================================================
// Pin driver
// =============================================================================

struct Pin<const PORT: u8, const PIN: u8> {
    cnf: u32,
}

impl<const PORT: u8, const PIN: u8> Pin<PORT, PIN> {
    /// Options a pin accepts. `bool` is the one scalar option: true drives
    /// the pin as an output (the DIR bit).
    const OPTIONS: TypeSet<6> = type_set!(bool, Input, Pull, Drive, Sense, McuSel);

    /// Assemble the PIN_CNF word from a pack of options, in any order, with
    /// unmentioned options at their hardware defaults.
    const fn configure<const N: usize>(opts: ParamPack<N>) -> Self {
        validate_params!(Self::OPTIONS, opts);
        let dir = opts.extract::<bool>();
        let input = opts.extract::<Input>();
        let pull = opts.extract::<Pull>();
        let drive = opts.extract::<Drive>();
        let sense = opts.extract::<Sense>();
        let mcusel = opts.extract::<McuSel>();
        let cnf = (dir as u32)
            | ((input as u32) << 1)
            | ((pull as u32) << 2)
            | ((drive as u32) << 8)
            | ((sense as u32) << 16)
            | ((mcusel as u32) << 28);
        Self { cnf }
    }

    const fn port(&self) -> u8 {
        PORT
    }

    const fn pin(&self) -> u8 {
        PIN
    }
}

// =============================================================================
// Board configuration, fixed at build time
// =============================================================================

const LED: Pin<0, 13> = Pin::configure(params![true, Pull::Up, Drive::H0H1]);
const BUTTON: Pin<0, 11> = Pin::configure(params![Input::Connected, Pull::Up, Sense::Low]);
const RESET: Pin<0, 18> = Pin::configure(params![]);

// The register words are complete before the program starts.
const _: () = {
    assert!(LED.cnf == (1 << 0) | (1 << 1) | (3 << 2) | (3 << 8));
    assert!(BUTTON.cnf == (3 << 2) | (3 << 16));
    assert!(RESET.cnf == 1 << 1);
};

fn main() {
    println!(
        "P{}.{:02} PIN_CNF = {:#010x}  (LED: output, pull-up, high drive)",
        LED.port(),
        LED.pin(),
        LED.cnf
    );
    println!(
        "P{}.{:02} PIN_CNF = {:#010x}  (BUTTON: input, pull-up, sense low)",
        BUTTON.port(),
        BUTTON.pin(),
        BUTTON.cnf
    );
    println!(
        "P{}.{:02} PIN_CNF = {:#010x}  (RESET: hardware defaults)",
        RESET.port(),
        RESET.pin(),
        RESET.cnf
    );
}
