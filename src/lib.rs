pub mod configuration;

pub mod curveerror;

pub mod access {
    pub mod principal;
    pub mod accesscontroller;
}

pub mod circle {
    pub mod circlecomponent;
    pub mod curveid;
    pub mod curvedefinition;
    pub mod sampledpoint;
}

pub mod evaluation {
    pub mod domain;
    pub mod curveevaluator;
    pub mod linearspacesampler;
}

pub mod math {
    pub mod fixedpoint;
    pub mod trigonometry;
    pub mod curve {
        pub mod curve;
        pub mod point2d;
        pub mod epicyclecurve;
    }
}

pub mod registry {
    pub mod curvestore;
    pub mod curveobserver;
    pub mod curveregistry;
}

pub mod transformcurve;
