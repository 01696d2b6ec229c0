#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{error, info, trace};
use defmt_rtt as _;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Ticker;
use ppm_receiver::board::{CONTROL_PERIOD, DIAGNOSTIC_BAUDRATE, DIAGNOSTIC_EVERY, MAPPER_CONFIG};
use ppm_receiver::{
    BridgeError, ChannelWidths, CommandBridge, CommandMapper, EdgeEvent, PilotCommands,
    PinEdgeSource, Polarity, PulseCapture, SharedChannels, SignalSink, UartDiagnostics,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

/// Channel widths, written by the capture task and read by the control task.
static CHANNELS: SharedChannels = SharedChannels::new();

/// Latest pilot commands for the vehicle control loop.
/// Using Signal provides "latest value wins" semantics: a cycle the consumer
/// missed is simply replaced by the next one.
static COMMANDS_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, PilotCommands>> =
    StaticCell::new();

/// Snapshots handed from the control task to the diagnostics task.
static DIAGNOSTICS_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, ChannelWidths>> =
    StaticCell::new();

/// Edge capture runs here, preempting the thread-mode executor.
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("PPM receiver starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let commands = COMMANDS_SIGNAL.init(Signal::new());
    let diagnostics = DIAGNOSTICS_SIGNAL.init(Signal::new());

    // --- PPM input ---
    let ppm_pin = Input::new(p.PIN_2, Pull::Down);
    let polarity = Polarity::configured();
    let edges = PinEdgeSource::new(ppm_pin, polarity);
    let capture = PulseCapture::new(&CHANNELS);
    info!("PPM input on GPIO 2, {:?} edges", polarity);

    // --- Diagnostic UART ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = DIAGNOSTIC_BAUDRATE;
    let tx = UartTx::new(p.UART0, p.PIN_0, p.DMA_CH0, uart_config);
    let dump = UartDiagnostics::new(tx);

    // --- Command mapping ---
    let bridge = CommandBridge::new(
        &CHANNELS,
        CommandMapper::new(MAPPER_CONFIG),
        SignalSink::new(commands),
    );

    // High priority: edge capture
    interrupt::SWI_IRQ_1.set_priority(Priority::P1);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high.spawn(capture_task(edges, capture).unwrap());

    // Thread mode: control loop and diagnostics
    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(control_task(bridge, &CHANNELS, diagnostics).unwrap());
        spawner.spawn(diagnostics_task(dump, diagnostics).unwrap());
        info!("PPM receiver initialized, waiting for sync...");
    })
}

/// Capture task - timestamps PPM edges and feeds the decoder.
#[embassy_executor::task]
async fn capture_task(
    mut edges: PinEdgeSource<Input<'static>>,
    mut capture: PulseCapture<'static>,
) {
    // The first edge after boot always reads as a sync gap, wherever it falls
    // in the frame. Slots are misaligned until the next real gap.
    loop {
        match capture.capture_from(&mut edges).await {
            Ok(EdgeEvent::Sync { first: true, width }) => {
                info!("PPM sync acquired (gap {} us)", width);
            }
            Ok(_) => {}
            Err(e) => {
                error!("Edge input error: {:?}", e);
            }
        }
    }
}

/// Control task - maps the latest widths once per control period.
#[embassy_executor::task]
async fn control_task(
    mut bridge: CommandBridge<'static, SignalSink>,
    channels: &'static SharedChannels,
    diagnostics: &'static Signal<CriticalSectionRawMutex, ChannelWidths>,
) {
    let mut ticker = Ticker::every(CONTROL_PERIOD);
    let mut cycle: u32 = 0;
    let mut link_up = false;

    loop {
        ticker.next().await;

        match bridge.process_one().await {
            Ok(commands) => {
                if !link_up {
                    info!("RC commands available, mode {:?}", commands.mode);
                    link_up = true;
                }
                trace!("Commands: {:?}", commands);
            }
            // Nothing to do until the first sync gap
            Err(BridgeError::NotReady) => {}
            Err(e) => {
                error!("Command output error: {:?}", e);
            }
        }

        cycle = cycle.wrapping_add(1);
        if cycle % DIAGNOSTIC_EVERY == 0 {
            diagnostics.signal(channels.snapshot());
        }
    }
}

/// Diagnostics task - dumps raw channel widths over UART.
#[embassy_executor::task]
async fn diagnostics_task(
    mut dump: UartDiagnostics<'static>,
    diagnostics: &'static Signal<CriticalSectionRawMutex, ChannelWidths>,
) {
    loop {
        let widths = diagnostics.wait().await;
        if let Err(e) = dump.write_report(&widths).await {
            error!("Diagnostics error: {:?}", e);
        }
    }
}
