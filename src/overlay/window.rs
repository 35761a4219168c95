use std::ffi::c_void;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{debug, error};
use windows::Win32::Foundation::{COLORREF, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, CreateSolidBrush, DeleteObject, EndPaint, FillRect, HBRUSH, HDC, InvalidateRect,
    PAINTSTRUCT, UpdateWindow,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CREATESTRUCTW, CS_HREDRAW, CS_VREDRAW, CreateWindowExW, DefWindowProcW, DestroyWindow,
    DispatchMessageW,
    GWLP_USERDATA, GetClientRect, GetMessageW, GetSystemMetrics, GetWindowLongPtrW, HWND_TOPMOST,
    LWA_COLORKEY, MSG, PostMessageW, PostQuitMessage, RegisterClassW, SM_CXSCREEN, SM_CYSCREEN,
    SPI_GETWORKAREA, SW_SHOWNOACTIVATE, SWP_NOACTIVATE, SWP_SHOWWINDOW,
    SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SetLayeredWindowAttributes, SetWindowLongPtrW,
    SetWindowPos, ShowWindow, SystemParametersInfoW, TranslateMessage, WINDOW_EX_STYLE, WM_CLOSE,
    WM_DESTROY, WM_NCCREATE, WM_NCDESTROY, WM_PAINT, WM_SIZE, WNDCLASSW, WS_DISABLED,
    WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};
use windows::core::{PCWSTR, w};

use super::config::{LineColor, OverlayConfig};
use super::layout::Rect;
use super::manager::Compositor;
use super::render::{Canvas, LineRenderer};

const CLASS_NAME: PCWSTR = w!("LineOverlayClass");
const WINDOW_NAME: PCWSTR = w!("Line Overlay");

/// Background color. Keyed out by the layered window, so it shows as see-through.
const KEY_COLOR: COLORREF = COLORREF(0x0000_0000);

/// Window class atom, registered once and reused by every overlay window.
static WINDOW_CLASS_ATOM: AtomicU16 = AtomicU16::new(0);

// ─── GDI canvas ─────────────────────────────────────────────────────────────

struct GdiCanvas {
    hdc: HDC,
    width: i32,
    height: i32,
}

impl Canvas for GdiCanvas {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: LineColor) {
        if color.is_transparent() {
            return;
        }
        let (r, g, b) = color.rgb();
        let rc = RECT {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        };
        unsafe {
            let brush = CreateSolidBrush(COLORREF(r as u32 | (g as u32) << 8 | (b as u32) << 16));
            if !brush.is_invalid() {
                let _ = FillRect(self.hdc, &rc, brush);
                let _ = DeleteObject(brush.into());
            }
        }
    }
}

// ─── Window procedure ───────────────────────────────────────────────────────

/// Renderer owned by the window, stored in `GWLP_USERDATA`.
unsafe fn renderer<'a>(hwnd: HWND) -> Option<&'a mut LineRenderer> {
    unsafe {
        let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut LineRenderer;
        ptr.as_mut()
    }
}

/// Window procedure callback for overlay windows.
///
/// * `WM_NCCREATE`  — takes the renderer handed to `CreateWindowExW`.
/// * `WM_SIZE`      — forwards the client size to the renderer and repaints.
/// * `WM_PAINT`     — clears to the key color and paints the lines.
/// * `WM_DESTROY`   — ends the thread's message loop.
/// * `WM_NCDESTROY` — frees the renderer.
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe {
        match msg {
            WM_NCCREATE => {
                let cs = lparam.0 as *const CREATESTRUCTW;
                if let Some(cs) = cs.as_ref() {
                    let slot = cs.lpCreateParams as *mut Option<Box<LineRenderer>>;
                    if let Some(r) = slot.as_mut().and_then(Option::take) {
                        SetWindowLongPtrW(hwnd, GWLP_USERDATA, Box::into_raw(r) as isize);
                    }
                }
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }
            WM_SIZE => {
                let width = (lparam.0 & 0xFFFF) as i32;
                let height = ((lparam.0 >> 16) & 0xFFFF) as i32;
                if let Some(r) = renderer(hwnd) {
                    if r.resize(width, height) {
                        let _ = InvalidateRect(Some(hwnd), None, true);
                    }
                }
                LRESULT(0)
            }
            WM_PAINT => {
                let mut ps = PAINTSTRUCT::default();
                let hdc = BeginPaint(hwnd, &mut ps);
                if !hdc.is_invalid() {
                    let background = CreateSolidBrush(KEY_COLOR);
                    if !background.is_invalid() {
                        let _ = FillRect(hdc, &ps.rcPaint, background);
                        let _ = DeleteObject(background.into());
                    }

                    let mut client = RECT::default();
                    if GetClientRect(hwnd, &mut client).is_ok() {
                        if let Some(r) = renderer(hwnd) {
                            let mut canvas = GdiCanvas {
                                hdc,
                                width: client.right - client.left,
                                height: client.bottom - client.top,
                            };
                            r.paint(&mut canvas);
                        }
                    }
                    let _ = EndPaint(hwnd, &ps);
                }
                LRESULT(0)
            }
            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }
            WM_NCDESTROY => {
                let ptr = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) as *mut LineRenderer;
                if !ptr.is_null() {
                    drop(Box::from_raw(ptr));
                }
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }
            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}

// ─── Class registration ─────────────────────────────────────────────────────

/// Register `LineOverlayClass`, whose procedure paints through the window's
/// [`LineRenderer`]. Later calls return early once the atom is known.
pub fn register_overlay_class() -> Result<()> {
    if WINDOW_CLASS_ATOM.load(Ordering::Acquire) != 0 {
        return Ok(());
    }

    let wc = WNDCLASSW {
        lpfnWndProc: Some(wnd_proc),
        hInstance: HINSTANCE(std::ptr::null_mut()),
        lpszClassName: CLASS_NAME,
        style: CS_HREDRAW | CS_VREDRAW,
        hbrBackground: HBRUSH(std::ptr::null_mut()),
        ..Default::default()
    };

    let atom = unsafe { RegisterClassW(&wc) };
    if atom == 0 {
        bail!("failed to register overlay window class");
    }
    WINDOW_CLASS_ATOM.store(atom, Ordering::Release);
    Ok(())
}

// ─── Window creation ────────────────────────────────────────────────────────

/// Screen rectangle covered by an overlay as `(x, y, width, height)`.
fn target_area(cover_taskbar: bool) -> (i32, i32, i32, i32) {
    unsafe {
        if !cover_taskbar {
            let mut work = RECT::default();
            let got_work_area = SystemParametersInfoW(
                SPI_GETWORKAREA,
                0,
                Some(&mut work as *mut RECT as *mut c_void),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
            );
            if got_work_area.is_ok() {
                return (
                    work.left,
                    work.top,
                    work.right - work.left,
                    work.bottom - work.top,
                );
            }
        }
        (
            0,
            0,
            GetSystemMetrics(SM_CXSCREEN),
            GetSystemMetrics(SM_CYSCREEN),
        )
    }
}

/// Open one color-keyed line overlay and pump its messages until it closes.
///
/// Black is the layered window's color key, so only the painted lines show.
/// The popup is disabled and `WS_EX_TRANSPARENT`, so clicks reach the windows
/// below, and it stays topmost without a taskbar button or focus.
///
/// The `HWND` is handed over only once the window is fully set up. The
/// rendezvous send fails if `attach` already gave up waiting; the window is
/// then destroyed here instead of being left behind untracked.
fn run_overlay_window(config: OverlayConfig, hwnd_tx: mpsc::SyncSender<usize>) -> Result<()> {
    let (x, y, width, height) = target_area(config.cover_taskbar);
    // Moved into the window by WM_NCCREATE; dropped here if that never happens.
    let mut pending: Option<Box<LineRenderer>> = Some(Box::new(LineRenderer::new(config)));

    unsafe {
        let ex_style = WINDOW_EX_STYLE(
            WS_EX_LAYERED.0
                | WS_EX_TRANSPARENT.0
                | WS_EX_TOPMOST.0
                | WS_EX_TOOLWINDOW.0
                | WS_EX_NOACTIVATE.0,
        );

        let hwnd = CreateWindowExW(
            ex_style,
            CLASS_NAME,
            WINDOW_NAME,
            WS_POPUP | WS_DISABLED,
            x,
            y,
            width,
            height,
            None,
            None,
            Some(HINSTANCE(std::ptr::null_mut())),
            Some(&mut pending as *mut Option<Box<LineRenderer>> as *const c_void),
        )
        .context("failed to create overlay window")?;

        if hwnd.0.is_null() {
            bail!("failed to create overlay window");
        }

        let shown = SetLayeredWindowAttributes(hwnd, KEY_COLOR, 0, LWA_COLORKEY)
            .context("failed to set overlay color key")
            .and_then(|()| {
                let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
                SetWindowPos(
                    hwnd,
                    Some(HWND_TOPMOST),
                    x,
                    y,
                    width,
                    height,
                    SWP_SHOWWINDOW | SWP_NOACTIVATE,
                )
                .context("failed to place overlay window")
            })
            .and_then(|()| {
                hwnd_tx
                    .send(hwnd.0 as usize)
                    .context("overlay owner stopped waiting")
            });
        if let Err(e) = shown {
            let _ = DestroyWindow(hwnd);
            return Err(e);
        }
        let _ = UpdateWindow(hwnd);

        // Run the message loop until WM_DESTROY.
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        Ok(())
    }
}

// ─── Compositor ─────────────────────────────────────────────────────────────

/// A live overlay window and the thread running its message loop.
pub struct Win32Surface {
    hwnd: usize,
    _thread: JoinHandle<()>,
}

/// [`Compositor`] backed by layered Win32 popup windows.
///
/// Windows needs no user permission to draw topmost windows, so
/// [`Compositor::can_draw_overlays`] keeps its default.
#[derive(Default)]
pub struct Win32Compositor;

impl Compositor for Win32Compositor {
    type Surface = Win32Surface;

    fn attach(&mut self, config: &OverlayConfig) -> Result<Win32Surface> {
        register_overlay_class()?;

        let config = config.clone();
        let (hwnd_tx, hwnd_rx) = mpsc::sync_channel::<usize>(0);
        let thread = std::thread::Builder::new()
            .name("line-overlay".into())
            .spawn(move || {
                if let Err(e) = run_overlay_window(config, hwnd_tx) {
                    error!("overlay thread error: {e:#}");
                }
            })
            .context("failed to spawn overlay thread")?;

        // Wait briefly for a ready window. Dropping `hwnd_rx` on timeout makes
        // the thread tear down anything it creates afterwards.
        let hwnd = hwnd_rx
            .recv_timeout(Duration::from_secs(2))
            .context("overlay window was not created")?;
        debug!(hwnd, "overlay window created");

        Ok(Win32Surface {
            hwnd,
            _thread: thread,
        })
    }

    fn detach(&mut self, surface: Win32Surface) {
        unsafe {
            let _ = PostMessageW(
                Some(HWND(surface.hwnd as *mut c_void)),
                WM_CLOSE,
                WPARAM(0),
                LPARAM(0),
            );
        }
        debug!(hwnd = surface.hwnd, "overlay window closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_hands_back_a_ready_window() {
        let mut compositor = Win32Compositor;
        let config = OverlayConfig {
            colors: vec!["green".into()],
            line_count: 3,
            ..Default::default()
        };

        let surface = compositor.attach(&config).unwrap();
        assert_ne!(surface.hwnd, 0);
        compositor.detach(surface);
    }
}
