//! Error boundary components for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            align-items: flex-start;
                            gap: 10px;
                            padding: 24px;
                        ",
                        h1 {
                            style: "color: #B91C1C; font-size: 34px; margin: 0;",
                            "Something went wrong"
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 18px; margin: 0;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color: #4F46E5; font-size: 16px;",
                            "Back to the home page"
                        }
                        pre {
                            style: "
                                border: 1px solid #FECACA;
                                border-radius: 6px;
                                padding: 10px;
                                text-wrap: auto;
                                max-width: 100%;
                                overflow-x: auto;
                            ",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(captured) => format!("{:#?}", captured.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "
                                color: #4F46E5;
                                font-size: 15px;
                                border: 1px solid #4F46E5;
                                background: white;
                                padding: 6px 14px;
                                border-radius: 6px;
                                cursor: pointer;
                            ",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                height: 100%;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 8px;
            ",
            h2 {
                style: "color: #B91C1C; font-size: 22px; margin: 0;",
                "Component Error"
            }
            pre {
                style: "
                    color: #7F1D1D;
                    border: 1px solid #FECACA;
                    border-radius: 6px;
                    padding: 10px;
                    text-wrap: auto;
                    max-width: 500px;
                    max-height: 400px;
                    overflow-y: auto;
                ",
                "{error_txt}"
            }
            {children}
        }
    }
}
