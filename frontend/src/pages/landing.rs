use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::mock_phone::MockPhoneApp;
use crate::components::status_pill::StatusPill;
use crate::connection::Connection;
use crate::content::{FEATURES, FOOTER_COLUMNS, SOCIAL_LINKS, STATS, STEPS};

#[function_component(Landing)]
pub fn landing() -> Html {
    let connection = use_state(Connection::default);

    // Probe the backend once on mount
    {
        let connection = connection.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let result = api::get_bus_info().await;
                    connection.set(Connection::from_probe(result));
                });
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <StatusPill connection={(*connection).clone()} />

            <section class="hero">
                <div class="hero-blob hero-blob-blue"></div>
                <div class="hero-blob hero-blob-purple"></div>

                <div class="container hero-grid">
                    <div class="hero-text">
                        <div class="hero-badge">
                            <span class="pulse-dot"></span>
                            {"Live in 250+ Cities"}
                        </div>
                        <h1 class="hero-title">
                            {"Never miss your "}<br />
                            <span class="gradient-text">{"bus again."}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Join 2 million commuters who save time every day. Get accurate arrival times, live map tracking, and service alerts right in your pocket."}
                        </p>

                        {
                            if let Some(data) = connection.backend_data() {
                                html! {
                                    <div class="backend-block">
                                        <p class="backend-block-title">{"🚀 Live from Backend:"}</p>
                                        <p class="backend-block-line">{ data.route_line() }</p>
                                        <p class="backend-block-line">{ data.next_stop_line() }</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }

                        <div class="hero-cta-group">
                            <button class="btn btn-dark">{"📱 Get the App"}</button>
                            <button class="btn btn-light">{"View Web Map"}</button>
                        </div>
                        <div class="hero-rating">
                            <div class="avatar-stack">
                                { for (1..=4).map(|i| html! {
                                    <div key={i} class="avatar">{format!("U{}", i)}</div>
                                }) }
                            </div>
                            <div class="rating-text">
                                <span class="rating-score">{"4.9/5"}</span>{" rating from active users"}
                            </div>
                        </div>
                    </div>

                    <div class="hero-visual">
                        <div class="hero-visual-glow"></div>
                        <MockPhoneApp />
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Everything you need to commute smarter"}</h2>
                        <p>{"We don't just show you where the bus is. We help you plan your entire journey from door to door."}</p>
                    </div>
                    <div class="feature-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div key={feature.title} class="feature-card">
                                <div class="feature-icon">{ feature.icon }</div>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="stats">
                <div class="container stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div key={stat.label} class="stat">
                            <div class="stat-value">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="how-it-works" class="steps">
                <div class="container steps-grid">
                    <div class="steps-list">
                        { for STEPS.iter().map(|step| html! {
                            <div key={step.number} class="step">
                                <div class="step-number">{ step.number }</div>
                                <div>
                                    <h3>{ step.title }</h3>
                                    <p>{ step.description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="route-art-card">
                        <div class="route-art">
                            <div class="route-art-ring"></div>
                            <div class="route-art-road"></div>
                            <div class="route-art-bus">{"🚌"}</div>
                            <div class="route-art-stop"><div></div></div>
                            <div class="route-art-card-lines">
                                <div class="line short"></div>
                                <div class="line"></div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <div class="cta-card">
                        <div class="cta-decor cta-decor-top"></div>
                        <div class="cta-decor cta-decor-bottom"></div>
                        <div class="cta-content">
                            <h2>{"Ready to upgrade your commute?"}</h2>
                            <p>{"Download RideForYou today and stop wondering when the bus will arrive. Available on iOS and Android."}</p>
                            <div class="cta-buttons">
                                <button class="btn btn-white">{"🍎 App Store"}</button>
                                <button class="btn btn-blue">{"▶ Google Play"}</button>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <div class="footer-grid">
                        <div class="footer-brand">
                            <div class="brand">
                                <div class="brand-icon">{"🚌"}</div>
                                <span class="brand-name">{"RideForYou"}</span>
                            </div>
                            <p>{"Making public transportation predictable, accessible, and easy for everyone. Built with love for the daily commuter."}</p>
                        </div>
                        { for FOOTER_COLUMNS.iter().map(|column| html! {
                            <div key={column.heading}>
                                <h4>{ column.heading }</h4>
                                <ul>
                                    { for column.links.iter().map(|link| html! {
                                        <li key={*link}><a href="#">{ *link }</a></li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                    <div class="footer-bottom">
                        <p>{"© 2024 RideForYou Inc. All rights reserved."}</p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a key={*link} href="#">{ *link }</a>
                            }) }
                        </div>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        overflow: hidden;
                        padding: 8rem 0 5rem;
                    }
                    .hero-blob {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                        opacity: 0.5;
                        pointer-events: none;
                    }
                    .hero-blob-blue {
                        top: 0;
                        right: 0;
                        width: 600px;
                        height: 600px;
                        background: #dbeafe;
                        transform: translate(33%, -50%);
                    }
                    .hero-blob-purple {
                        bottom: 0;
                        left: 0;
                        width: 500px;
                        height: 500px;
                        background: #f3e8ff;
                        transform: translate(-33%, 33%);
                    }
                    .hero-grid {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 4rem;
                    }
                    .hero-text {
                        text-align: center;
                        z-index: 1;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #eff6ff;
                        border: 1px solid #dbeafe;
                        color: #1d4ed8;
                        padding: 0.375rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        margin-bottom: 1.5rem;
                    }
                    .pulse-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #3b82f6;
                        box-shadow: 0 0 0 0 rgba(59, 130, 246, 0.6);
                        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    .hero-title {
                        font-size: 3rem;
                        font-weight: 800;
                        line-height: 1.1;
                        letter-spacing: -0.025em;
                        margin: 0 0 1.5rem;
                    }
                    .gradient-text {
                        background: linear-gradient(to right, #2563eb, #9333ea);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        font-size: 1.125rem;
                        color: #475569;
                        line-height: 1.6;
                        max-width: 32rem;
                        margin: 0 auto 2rem;
                    }
                    .backend-block {
                        margin-bottom: 1.5rem;
                        padding: 1rem;
                        background: #f0fdf4;
                        border: 1px solid #bbf7d0;
                        border-radius: 0.5rem;
                        text-align: left;
                    }
                    .backend-block-title {
                        margin: 0 0 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #166534;
                    }
                    .backend-block-line {
                        margin: 0;
                        font-size: 0.75rem;
                        color: #15803d;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-rating {
                        margin-top: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .avatar-stack {
                        display: flex;
                    }
                    .avatar {
                        width: 2rem;
                        height: 2rem;
                        margin-left: -0.5rem;
                        border-radius: 9999px;
                        border: 2px solid #fff;
                        background: #e2e8f0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: #64748b;
                    }
                    .rating-text {
                        font-size: 0.875rem;
                        color: #64748b;
                    }
                    .rating-score {
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .hero-visual {
                        position: relative;
                        display: flex;
                        justify-content: center;
                    }
                    .hero-visual-glow {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, transparent, rgba(239, 246, 255, 0.5), transparent);
                        border-radius: 9999px;
                        filter: blur(40px);
                        transform: scale(0.9);
                    }

                    .phone-frame {
                        position: relative;
                        width: 280px;
                        height: 500px;
                        border: 14px solid #1f2937;
                        border-radius: 2.5rem;
                        background: #111827;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                        overflow: hidden;
                    }
                    .phone-button {
                        position: absolute;
                        width: 3px;
                        background: #1f2937;
                    }
                    .phone-button.left { left: -17px; }
                    .phone-button.left.top { top: 72px; height: 32px; }
                    .phone-button.left.bottom { top: 124px; height: 46px; }
                    .phone-button.right { right: -17px; top: 142px; height: 64px; }
                    .phone-screen {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        width: 100%;
                        height: 100%;
                        border-radius: 2rem;
                        overflow: hidden;
                        background: #f8fafc;
                    }
                    .mock-header {
                        position: relative;
                        z-index: 10;
                        background: #2563eb;
                        color: #fff;
                        padding: 2rem 1rem 1rem;
                    }
                    .mock-header-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .mock-brand-name {
                        margin-left: 0.5rem;
                        font-weight: 700;
                        font-size: 0.875rem;
                    }
                    .mock-line-badge {
                        font-size: 0.75rem;
                        background: #3b82f6;
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                    }
                    .mock-arrival { margin-top: 1rem; }
                    .mock-arrival-label { margin: 0; font-size: 0.75rem; opacity: 0.8; }
                    .mock-arrival-eta { margin: 0; font-size: 1.5rem; font-weight: 700; }
                    .mock-map {
                        position: relative;
                        flex-grow: 1;
                        background: #e2e8f0;
                    }
                    .mock-map-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        background-image: radial-gradient(#475569 1px, transparent 1px);
                        background-size: 20px 20px;
                    }
                    .mock-route-track,
                    .mock-route-line,
                    .mock-stop,
                    .mock-bus {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                    }
                    .mock-route-track { top: 0; bottom: 0; width: 0.5rem; background: #bfdbfe; }
                    .mock-route-line { top: 10%; bottom: 10%; width: 0.25rem; background: #3b82f6; border-radius: 9999px; }
                    .mock-stop {
                        z-index: 10;
                        width: 1rem;
                        height: 1rem;
                        margin-top: -0.5rem;
                        background: #fff;
                        border: 4px solid #94a3b8;
                        border-radius: 9999px;
                        box-sizing: border-box;
                    }
                    .mock-stop.active { border-color: #3b82f6; }
                    .mock-bus {
                        z-index: 20;
                        margin-top: -1.1rem;
                        transition: top 75ms linear;
                    }
                    .mock-bus-icon {
                        background: #2563eb;
                        color: #fff;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        box-shadow: 0 0 0 4px rgba(255, 255, 255, 0.5);
                    }
                    .mock-bus-tooltip {
                        position: absolute;
                        left: 100%;
                        top: 50%;
                        margin-left: 0.75rem;
                        transform: translateY(-50%);
                        background: #fff;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                        font-size: 10px;
                        font-weight: 700;
                        color: #334155;
                        white-space: nowrap;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .mock-sheet {
                        position: absolute;
                        bottom: 0;
                        width: 100%;
                        box-sizing: border-box;
                        background: #fff;
                        border-radius: 1rem 1rem 0 0;
                        padding: 1rem;
                        box-shadow: 0 -5px 20px rgba(0, 0, 0, 0.1);
                    }
                    .mock-nearby {
                        list-style: none;
                        margin: 0 0 0.75rem;
                        padding: 0;
                        font-size: 0.7rem;
                        color: #334155;
                    }
                    .mock-nearby li { padding: 0.2rem 0; border-bottom: 1px solid #f1f5f9; }
                    .mock-track-button {
                        width: 100%;
                        background: #2563eb;
                        color: #fff;
                        border: none;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        font-weight: 600;
                        font-size: 0.875rem;
                    }

                    .features { padding: 6rem 0; background: #fff; }
                    .section-heading { text-align: center; max-width: 42rem; margin: 0 auto 4rem; }
                    .section-heading h2 { font-size: 1.875rem; font-weight: 700; margin: 0 0 1rem; }
                    .section-heading p { color: #475569; font-size: 1.125rem; }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .feature-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: #f8fafc;
                        border: 1px solid #f1f5f9;
                        transition: background 0.2s, border-color 0.2s;
                    }
                    .feature-card:hover { background: #eff6ff; border-color: #dbeafe; }
                    .feature-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        margin-bottom: 1.5rem;
                        border-radius: 1rem;
                        background: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        transition: transform 0.2s;
                    }
                    .feature-card:hover .feature-icon { transform: scale(1.1); }
                    .feature-card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; }
                    .feature-card p { color: #475569; line-height: 1.6; margin: 0; }

                    .stats { padding: 5rem 0; background: #0f172a; color: #fff; }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 3rem;
                        text-align: center;
                    }
                    .stat-value { font-size: 3rem; font-weight: 700; color: #60a5fa; margin-bottom: 0.5rem; }
                    .stat-label { color: #94a3b8; }

                    .steps { padding: 6rem 0; background: #f8fafc; }
                    .steps-grid {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 4rem;
                    }
                    .steps-list { flex: 1 1 320px; display: flex; flex-direction: column; gap: 3rem; }
                    .step { display: flex; gap: 1.5rem; }
                    .step-number {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: #dbeafe;
                        color: #2563eb;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        font-size: 1.125rem;
                    }
                    .step h3 { margin: 0 0 0.5rem; font-size: 1.25rem; }
                    .step p { margin: 0; color: #475569; }
                    .route-art-card {
                        flex: 1 1 320px;
                        background: #fff;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        border: 1px solid #f1f5f9;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .route-art {
                        position: relative;
                        aspect-ratio: 1 / 1;
                        background: #f1f5f9;
                        border-radius: 1rem;
                        overflow: hidden;
                    }
                    .route-art-ring {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 80%;
                        height: 80%;
                        transform: translate(-50%, -50%);
                        border: 20px solid #fff;
                        border-radius: 9999px;
                        box-sizing: border-box;
                    }
                    .route-art-road {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 100%;
                        height: 20px;
                        background: #fff;
                        transform: translate(-50%, -50%) rotate(45deg);
                    }
                    .route-art-bus {
                        position: absolute;
                        top: 30%;
                        left: 30%;
                        z-index: 1;
                        padding: 0.75rem;
                        background: #2563eb;
                        border-radius: 9999px;
                        animation: bounce 1s infinite;
                    }
                    .route-art-stop {
                        position: absolute;
                        bottom: 30%;
                        right: 30%;
                        z-index: 1;
                        padding: 0.5rem;
                        background: #fff;
                        border-radius: 9999px;
                    }
                    .route-art-stop div { width: 1rem; height: 1rem; background: #94a3b8; border-radius: 9999px; }
                    .route-art-card-lines {
                        position: absolute;
                        bottom: 1rem;
                        left: 1rem;
                        width: 200px;
                        max-width: 60%;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.9);
                        border-radius: 0.75rem;
                    }
                    .route-art-card-lines .line { height: 0.5rem; background: #e2e8f0; border-radius: 0.25rem; }
                    .route-art-card-lines .line.short { width: 4rem; margin-bottom: 0.5rem; }

                    .cta { padding: 5rem 0; }
                    .cta-card {
                        position: relative;
                        overflow: hidden;
                        background: #2563eb;
                        border-radius: 3rem;
                        padding: 3rem;
                        text-align: center;
                    }
                    .cta-decor { position: absolute; border-radius: 9999px; }
                    .cta-decor-top {
                        top: 0;
                        right: 0;
                        width: 16rem;
                        height: 16rem;
                        background: #fff;
                        opacity: 0.1;
                        transform: translate(50%, -50%);
                    }
                    .cta-decor-bottom {
                        bottom: 0;
                        left: 0;
                        width: 24rem;
                        height: 24rem;
                        background: #1e40af;
                        opacity: 0.2;
                        transform: translate(-33%, 33%);
                    }
                    .cta-content { position: relative; z-index: 1; max-width: 48rem; margin: 0 auto; }
                    .cta-content h2 { color: #fff; font-size: 2.25rem; margin: 0 0 2rem; }
                    .cta-content p { color: #dbeafe; font-size: 1.125rem; margin: 0 0 2.5rem; }
                    .cta-buttons { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }

                    .footer { background: #f8fafc; padding: 5rem 0 2.5rem; border-top: 1px solid #e2e8f0; }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 3rem;
                        margin-bottom: 4rem;
                    }
                    .footer-brand p { color: #64748b; max-width: 20rem; line-height: 1.6; }
                    .footer h4 { margin: 0 0 1.5rem; }
                    .footer ul { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 1rem; }
                    .footer a { color: #475569; text-decoration: none; }
                    .footer a:hover { color: #2563eb; }
                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid #e2e8f0;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                    }
                    .footer-bottom p { color: #64748b; font-size: 0.875rem; margin: 0; }
                    .footer-social { display: flex; gap: 1.5rem; }
                    .footer-social a { color: #94a3b8; }

                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }

                    @media (min-width: 1024px) {
                        .hero { padding: 12rem 0 8rem; }
                        .hero-grid { flex-direction: row; }
                        .hero-text, .hero-visual { width: 50%; }
                        .hero-text { text-align: left; }
                        .hero-subtitle { margin-left: 0; }
                        .hero-cta-group, .hero-rating { justify-content: flex-start; }
                        .hero-title { font-size: 4.5rem; }
                        .cta-card { padding: 6rem; }
                        .cta-content h2 { font-size: 3rem; }
                    }
                    @media (max-width: 767px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </div>
    }
}
