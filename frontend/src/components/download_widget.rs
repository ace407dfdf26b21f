use yew::prelude::*;

use crate::content::{APP_STORE_ICON, GOOGLE_PLAY_ICON, QR_CODE};

#[derive(Properties, PartialEq)]
pub struct DownloadWidgetProps {
    pub node_ref: NodeRef,
}

/// Frosted-glass app download card. Hidden until the scroll choreography
/// adds `visible`.
#[function_component(DownloadWidget)]
pub fn download_widget(props: &DownloadWidgetProps) -> Html {
    html! {
        <div class="download-widget" ref={props.node_ref.clone()}>
            <div class="download-content">
                <div class="qr-container">
                    <img src={QR_CODE} alt="QR Code" class="qr-code-image" />
                </div>
                <div class="download-info">
                    <div class="download-title">{"Download Wealth Tracker"}</div>
                    <div class="app-store-buttons">
                        <div class="store-button google-play-btn">
                            <img src={GOOGLE_PLAY_ICON} alt="Google Play" class="store-icon" />
                        </div>
                        <div class="store-button app-store-btn">
                            <img src={APP_STORE_ICON} alt="App Store" class="store-icon" />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
