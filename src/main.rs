//! Demo composition root: a bare Win32 window stands in for the avatar (no
//! rendering), dragged with the left mouse button. Drop it onto another
//! window's title bar to dock; drag it away or close the host to undock.
//!
//! Usage: `perch [config.json]`

use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = perch::config::load_config(config_path.as_deref());

    #[cfg(target_os = "windows")]
    {
        if let Err(err) = demo::run(config) {
            log::error!("Demo failed: {}", err);
            std::process::exit(1);
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = config;
        eprintln!("The perch demo drives the Win32 backend and only runs on Windows.");
        std::process::exit(1);
    }
}

#[cfg(target_os = "windows")]
mod demo {
    use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use windows::Win32::Foundation::{COLORREF, HINSTANCE, HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
    use windows::Win32::Graphics::Gdi::HBRUSH;
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture};
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DefWindowProcW, DispatchMessageW, GetCursorPos, GetWindowLongPtrW,
        GetWindowRect, LoadCursorW, MoveWindow, PeekMessageW, PostQuitMessage, RegisterClassW,
        SetLayeredWindowAttributes, SetWindowLongPtrW, TranslateMessage, COLOR_WINDOW,
        GWL_EXSTYLE, IDC_ARROW, LWA_ALPHA, MSG, PM_REMOVE, WM_DESTROY, WM_LBUTTONDOWN,
        WM_LBUTTONUP, WM_MOUSEMOVE, WM_QUIT, WNDCLASSW, WS_EX_LAYERED, WS_EX_TOOLWINDOW,
        WS_EX_TRANSPARENT, WS_POPUP, WS_VISIBLE,
    };
    use windows::core::{w, Error, Result};

    use perch::platform::win32::Win32Desktop;
    use perch::{DockConfig, DockObserver, DockingEngine, SettingsStore, TickInputs, Tween};

    const AVATAR_SIZE: i32 = 200;
    const TICK: Duration = Duration::from_millis(16);
    const ENTRANCE_FROM_X: f32 = -260.0;
    const ENTRANCE_TO_X: f32 = 80.0;
    const ENTRANCE_Y: i32 = 400;
    const DRAG_ALPHA: u8 = 200;

    static DRAGGING: AtomicBool = AtomicBool::new(false);
    static DRAG_DX: AtomicI32 = AtomicI32::new(0);
    static DRAG_DY: AtomicI32 = AtomicI32::new(0);

    struct PoseLogger;

    impl DockObserver for PoseLogger {
        fn docked_changed(&self, docked: bool) {
            log::info!(
                "Pose flag -> {}",
                if docked { "window-sit" } else { "idle" }
            );
        }
    }

    pub fn run(config: DockConfig) -> Result<()> {
        let window = create_avatar_window()?;
        log::info!("Demo avatar window created ({:?})", window);

        let settings = Arc::new(SettingsStore::new(config));
        let mut engine = DockingEngine::new(Win32Desktop::new(), settings);
        engine.set_observer(Box::new(PoseLogger));

        // Glide in from off-screen, the tick-driven stand-in for the app's
        // coroutine entrance animations.
        let mut entrance = Tween::new(ENTRANCE_FROM_X, ENTRANCE_TO_X, 0.4);

        let mut msg = MSG::default();
        loop {
            while unsafe { PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE) }.as_bool() {
                if msg.message == WM_QUIT {
                    return Ok(());
                }
                unsafe {
                    let _ = TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
            }

            let dragging = DRAGGING.load(Ordering::Relaxed);
            if !entrance.is_finished() && !dragging && !engine.is_docked() {
                let x = entrance.advance(TICK.as_secs_f32()).round() as i32;
                let _ = unsafe {
                    MoveWindow(window, x, ENTRANCE_Y, AVATAR_SIZE, AVATAR_SIZE, true.into())
                };
            }

            engine.tick(&TickInputs {
                dragging,
                sitting: false,
                scale: 1.0,
            });

            std::thread::sleep(TICK);
        }
    }

    fn create_avatar_window() -> Result<HWND> {
        let instance = unsafe { GetModuleHandleW(windows::core::PCWSTR::null()) }?;
        let instance = HINSTANCE(instance.0);
        let class_name = w!("PerchDemoWindow");

        let class = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance,
            hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }?,
            hbrBackground: HBRUSH((COLOR_WINDOW.0 as usize + 1) as *mut core::ffi::c_void),
            lpszClassName: class_name,
            ..Default::default()
        };
        if unsafe { RegisterClassW(&class) } == 0 {
            return Err(Error::from_win32());
        }

        unsafe {
            CreateWindowExW(
                WS_EX_TOOLWINDOW | WS_EX_LAYERED,
                class_name,
                w!("perch"),
                WS_POPUP | WS_VISIBLE,
                ENTRANCE_FROM_X as i32,
                ENTRANCE_Y,
                AVATAR_SIZE,
                AVATAR_SIZE,
                None,
                None,
                Some(instance),
                None,
            )
        }
    }

    fn begin_drag(window: HWND) {
        let mut cursor = POINT::default();
        if unsafe { GetCursorPos(&mut cursor) }.is_err() {
            return;
        }
        let mut rect = RECT::default();
        if unsafe { GetWindowRect(window, &mut rect) }.is_err() {
            return;
        }
        DRAG_DX.store(cursor.x - rect.left, Ordering::Relaxed);
        DRAG_DY.store(cursor.y - rect.top, Ordering::Relaxed);

        unsafe {
            let _ = SetCapture(window);
            // Click-through while dragging: mouse capture keeps the move/up
            // messages coming, and the docking hit-test sees what is under
            // the avatar instead of the avatar itself.
            let ex = GetWindowLongPtrW(window, GWL_EXSTYLE);
            SetWindowLongPtrW(window, GWL_EXSTYLE, ex | WS_EX_TRANSPARENT.0 as isize);
            let _ = SetLayeredWindowAttributes(window, COLORREF(0), DRAG_ALPHA, LWA_ALPHA);
        }
        DRAGGING.store(true, Ordering::Relaxed);
    }

    fn drag_move(window: HWND) {
        let mut cursor = POINT::default();
        if unsafe { GetCursorPos(&mut cursor) }.is_err() {
            return;
        }
        let mut rect = RECT::default();
        if unsafe { GetWindowRect(window, &mut rect) }.is_err() {
            return;
        }
        let x = cursor.x - DRAG_DX.load(Ordering::Relaxed);
        let y = cursor.y - DRAG_DY.load(Ordering::Relaxed);
        let _ = unsafe {
            MoveWindow(window, x, y, rect.right - rect.left, rect.bottom - rect.top, true.into())
        };
    }

    fn end_drag(window: HWND) {
        DRAGGING.store(false, Ordering::Relaxed);
        unsafe {
            let _ = ReleaseCapture();
            let ex = GetWindowLongPtrW(window, GWL_EXSTYLE);
            SetWindowLongPtrW(window, GWL_EXSTYLE, ex & !(WS_EX_TRANSPARENT.0 as isize));
            let _ = SetLayeredWindowAttributes(window, COLORREF(0), 255, LWA_ALPHA);
        }
    }

    unsafe extern "system" fn wndproc(
        window: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        match msg {
            WM_LBUTTONDOWN => {
                begin_drag(window);
                LRESULT(0)
            }
            WM_MOUSEMOVE => {
                if DRAGGING.load(Ordering::Relaxed) {
                    drag_move(window);
                }
                LRESULT(0)
            }
            WM_LBUTTONUP => {
                end_drag(window);
                LRESULT(0)
            }
            WM_DESTROY => {
                unsafe { PostQuitMessage(0) };
                LRESULT(0)
            }
            _ => unsafe { DefWindowProcW(window, msg, wparam, lparam) },
        }
    }
}
